use log::*;
use std::sync::Arc;

use crate::deck::{compute_deck, DeckController, Direction, Dismissed};
use crate::favorites::Favorites;
use crate::model::display::DisplayBusiness;
use crate::screen::{Navigator, Screen};
use crate::storage::KeyValueStore;

/// Client state shared by the three screens
pub struct App {
    businesses: Vec<DisplayBusiness>,
    favorites: Favorites,
    deck: DeckController,
    navigator: Navigator,
}

impl App {
    pub fn start(businesses: Vec<DisplayBusiness>, store: Arc<dyn KeyValueStore>) -> Self {
        let favorites = Favorites::restore(store, &businesses);
        let mut app = App {
            businesses,
            favorites,
            deck: DeckController::default(),
            navigator: Navigator::default(),
        };
        app.refresh_deck();
        app
    }

    fn refresh_deck(&mut self) {
        let favorites = &self.favorites;
        self.deck = DeckController::new(compute_deck(&self.businesses, |id| favorites.contains(id)));
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    /// Entering the swipe screen from elsewhere deals a fresh deck
    pub fn tap_tab(&mut self, tab: Screen) {
        let before = self.navigator.screen();
        self.navigator.tap_tab(tab);
        self.entered(before);
    }

    pub fn start_swiping(&mut self) -> bool {
        let before = self.navigator.screen();
        let started = self.navigator.start_swiping();
        self.entered(before);
        started
    }

    fn entered(&mut self, before: Screen) {
        if before != Screen::Swipe && self.navigator.screen() == Screen::Swipe {
            self.refresh_deck();
        }
    }

    pub fn deck(&self) -> &DeckController {
        &self.deck
    }

    pub fn liked(&self) -> &[DisplayBusiness] {
        self.favorites.liked()
    }

    /// A right swipe likes the card and deals a fresh deck without it; a left
    /// swipe only moves on.
    pub fn swipe(&mut self, direction: Direction) -> Option<Dismissed> {
        let dismissed = self.deck.swipe(direction)?;
        match dismissed.direction {
            Direction::Right => {
                info!("Liked {}", dismissed.business.name);
                if self.favorites.like(dismissed.business.clone()) {
                    self.refresh_deck();
                }
            }
            Direction::Left => self.favorites.pass(&dismissed.business),
            Direction::Up | Direction::Down => {}
        }
        Some(dismissed)
    }
}
