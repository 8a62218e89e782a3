use anyhow::Result;
use log::*;
use std::io::{BufRead, Write};

use crate::app::App;
use crate::deck::Direction;
use crate::screen::Screen;
use crate::view;

const HELP: &str = "Commands: welcome|swipe|favorites (w/s/f), start, left|right|up|down (l/r/u/d), quit (q)";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Tab(Screen),
    Start,
    Swipe(Direction),
    Quit,
}

pub fn parse(line: &str) -> Option<Command> {
    let command = match line.trim().to_lowercase().as_str() {
        "w" | "welcome" => Command::Tab(Screen::Welcome),
        "s" | "swipe" => Command::Tab(Screen::Swipe),
        "f" | "favorites" => Command::Tab(Screen::Favorites),
        "start" => Command::Start,
        "l" | "left" => Command::Swipe(Direction::Left),
        "r" | "right" => Command::Swipe(Direction::Right),
        "u" | "up" => Command::Swipe(Direction::Up),
        "d" | "down" => Command::Swipe(Direction::Down),
        "q" | "quit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

pub fn render(app: &App) -> String {
    let body = match app.screen() {
        Screen::Welcome => view::welcome(),
        Screen::Swipe => view::card(app.deck().current()),
        Screen::Favorites => view::favorites(app.liked()),
    };
    format!("{}\n{}", view::header(app.screen()), body)
}

/// Applies one command. Swipes only count on the swipe screen.
pub fn apply(app: &mut App, command: Command) {
    match command {
        Command::Tab(screen) => app.tap_tab(screen),
        Command::Start => {
            app.start_swiping();
        }
        Command::Swipe(direction) => {
            if app.screen() != Screen::Swipe {
                debug!("Ignoring {:?} swipe outside the swipe screen", direction);
                return;
            }
            if app.swipe(direction).is_none() {
                debug!("Nothing dismissed by {:?} swipe", direction);
            }
        }
        Command::Quit => {}
    }
}

/// Reads commands until quit or end of input, redrawing after each
pub fn run<I: BufRead, O: Write>(app: &mut App, input: I, mut output: O) -> Result<()> {
    write!(output, "{}", render(app))?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse(&line) {
            Some(Command::Quit) => break,
            Some(command) => {
                apply(app, command);
                write!(output, "\n{}", render(app))?;
            }
            None => writeln!(output, "{}", HELP)?,
        }
        output.flush()?;
    }
    Ok(())
}
