// src/formatters/theme.rs
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Cyan,
    Green,
    Yellow,
    Red,
}

/// A style token: an optional foreground color plus weight modifiers.
/// `Style::default()` is the neutral style and paints nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn fg(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn is_neutral(&self) -> bool {
        *self == Style::default()
    }

    /// Applies the style as ANSI escapes.
    #[cfg(feature = "rich")]
    pub fn paint(&self, text: &str) -> String {
        use colored::Colorize;

        if self.is_neutral() {
            return text.to_string();
        }
        let mut styled = text.normal();
        if let Some(color) = self.color {
            styled = styled.color(match color {
                Color::Cyan => colored::Color::Cyan,
                Color::Green => colored::Color::Green,
                Color::Yellow => colored::Color::Yellow,
                Color::Red => colored::Color::Red,
            });
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.dim {
            styled = styled.dimmed();
        }
        styled.to_string()
    }

    /// Without the `rich` feature styles are carried but never rendered.
    #[cfg(not(feature = "rich"))]
    pub fn paint(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Maps lower-case level names to styles.
#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn with_style(mut self, level_name: &str, style: Style) -> Self {
        self.styles.insert(level_name.to_ascii_lowercase(), style);
        self
    }

    /// Unknown names resolve to the neutral style rather than an error.
    pub fn style_for(&self, level_name: &str) -> Style {
        self.styles
            .get(&level_name.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new()
            .with_style("debug", Style::fg(Color::Cyan).dim())
            .with_style("info", Style::fg(Color::Green))
            .with_style("warning", Style::fg(Color::Yellow))
            .with_style("error", Style::fg(Color::Red).bold())
    }
}
