//! Crossterm styling for screen text.

use crossterm::style::Stylize;

/// Consistent styling rules for the CLI. A colorless theme emits plain text.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, |t| t.bold().cyan().to_string())
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.bold().yellow().to_string())
    }

    pub fn gold(&self, amount: u32) -> String {
        let text = format!("{amount} G");
        self.paint(&text, |t| t.yellow().to_string())
    }

    pub fn good(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn bad(&self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    pub fn equipped_marker(&self) -> String {
        self.paint("[E]", |t| t.bold().green().to_string())
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, |t| t.dark_grey().to_string())
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.color {
            style(text)
        } else {
            text.to_string()
        }
    }
}
