use crate::model::display::DisplayBusiness;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, PartialEq)]
pub struct Dismissed {
    pub business: DisplayBusiness,
    pub direction: Direction,
}

/// Businesses not yet liked, in source order
pub fn compute_deck(all: &[DisplayBusiness], is_liked: impl Fn(&str) -> bool) -> Vec<DisplayBusiness> {
    all.iter().filter(|b| !is_liked(&b.id)).cloned().collect()
}

/// A snapshot of the deck with a cursor over it
#[derive(Debug, Default)]
pub struct DeckController {
    cards: Vec<DisplayBusiness>,
    cursor: usize,
}

impl DeckController {
    pub fn new(cards: Vec<DisplayBusiness>) -> Self {
        DeckController { cards, cursor: 0 }
    }

    pub fn cards(&self) -> &[DisplayBusiness] {
        &self.cards
    }

    pub fn current(&self) -> Option<&DisplayBusiness> {
        self.cards.get(self.cursor)
    }

    /// Cards still to come, the current one first
    pub fn remaining(&self) -> &[DisplayBusiness] {
        &self.cards[self.cursor.min(self.cards.len())..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.cursor += 1;
        }
    }

    /// Dismisses the current card. Vertical swipes are disabled and, like any
    /// swipe on an exhausted deck, do nothing.
    pub fn swipe(&mut self, direction: Direction) -> Option<Dismissed> {
        match direction {
            Direction::Left | Direction::Right => {}
            Direction::Up | Direction::Down => return None,
        }
        let business = self.current()?.clone();
        self.advance();
        Some(Dismissed {
            business,
            direction,
        })
    }
}
