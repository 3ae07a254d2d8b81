//! Numbered-menu parsing for line-oriented input.
//!
//! Accepts the menu digits (`1`..`5`, `0` to quit) as well as command names,
//! so scripted input can use either.

use crate::types::Command;

/// A recognised menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Command(Command),
    Quit,
}

/// Parse one input line. Returns `None` for blank or unrecognised lines.
pub fn parse_menu_line(line: &str) -> Option<MenuChoice> {
    let word = line.trim();
    if word.is_empty() {
        return None;
    }
    if matches!(word.to_lowercase().as_str(), "0" | "q" | "quit" | "exit") {
        return Some(MenuChoice::Quit);
    }

    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(command) = Command::from_menu_digit(c) {
            return Some(MenuChoice::Command(command));
        }
    }
    Command::from_str(word).map(MenuChoice::Command)
}
