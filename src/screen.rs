use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Welcome,
    Swipe,
    Favorites,
}

pub const TABS: [Screen; 3] = [Screen::Welcome, Screen::Swipe, Screen::Favorites];

impl Default for Screen {
    fn default() -> Self {
        Screen::Welcome
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Screen::Welcome => "Welcome",
            Screen::Swipe => "Swipe",
            Screen::Favorites => "Favorites",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    screen: Screen,
}

impl Navigator {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn tap_tab(&mut self, tab: Screen) {
        self.screen = tab;
    }

    /// "Start Swiping" only exists on the welcome screen
    pub fn start_swiping(&mut self) -> bool {
        if self.screen != Screen::Welcome {
            return false;
        }
        self.screen = Screen::Swipe;
        true
    }
}
