use itertools::Itertools;
use std::fmt::Write;

use crate::model::display::DisplayBusiness;
use crate::screen::{Screen, TABS};

pub const BRAND: &str = "✨ Sparks";
pub const NO_FAVORITES: &str = "No favorites yet. Swipe right to save a business.";
pub const ALL_CAUGHT_UP: &str = "You're all caught up 🎉";

const GRID_COLUMNS: usize = 2;
const CELL_WIDTH: usize = 34;

#[derive(Debug, PartialEq)]
pub enum FavoritesView<'a> {
    Empty(&'static str),
    Grid(Vec<Vec<&'a DisplayBusiness>>),
}

pub fn favorites_view(liked: &[DisplayBusiness]) -> FavoritesView<'_> {
    if liked.is_empty() {
        return FavoritesView::Empty(NO_FAVORITES);
    }
    let rows = liked
        .iter()
        .chunks(GRID_COLUMNS)
        .into_iter()
        .map(|row| row.collect())
        .collect();
    FavoritesView::Grid(rows)
}

pub fn header(active: Screen) -> String {
    let tabs = TABS
        .iter()
        .map(|tab| if *tab == active { format!("[{}]", tab) } else { format!(" {} ", tab) })
        .join(" ");
    format!("{}\n{}\n", BRAND, tabs)
}

pub fn welcome() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Find small businesses you love");
    let _ = writeln!(out, "Swipe right to save, left to pass.");
    let _ = writeln!(out, "> Start Swiping (type 'start')");
    for (title, text) in &[
        ("Discover", "Explore local shops and eats."),
        ("Support", "Save and revisit your favs."),
        ("Share", "Send your picks to friends."),
    ] {
        let _ = writeln!(out, "  {}: {}", title, text);
    }
    out
}

pub fn card(business: Option<&DisplayBusiness>) -> String {
    match business {
        None => format!("{}\n", ALL_CAUGHT_UP),
        Some(b) => format!(
            "{}\n{}\n{}\n{}\n",
            b.name,
            b.tags.iter().map(|t| format!("#{}", t)).join(" "),
            b.blurb,
            b.img
        ),
    }
}

fn cell(text: &str) -> String {
    let truncated: String = text.chars().take(CELL_WIDTH).collect();
    format!("{:<width$}", truncated, width = CELL_WIDTH)
}

pub fn favorites(liked: &[DisplayBusiness]) -> String {
    match favorites_view(liked) {
        FavoritesView::Empty(message) => format!("{}\n", message),
        FavoritesView::Grid(rows) => {
            let mut out = String::new();
            for row in rows {
                let names = row.iter().map(|b| cell(&b.name)).join(" | ");
                let tags = row.iter().map(|b| cell(&b.tags.join(" • "))).join(" | ");
                let _ = writeln!(out, "{}", names.trim_end());
                let _ = writeln!(out, "{}", tags.trim_end());
                let _ = writeln!(out);
            }
            out
        }
    }
}
