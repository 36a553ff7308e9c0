// src/formatters/console.rs
use crate::capability;
use crate::formatters::theme::Theme;
use crate::formatters::Formatter;
use crate::record::LogRecord;
use crate::utils::error::LoggingError;

// Minimum column widths for the styled layout.
const LEVEL_WIDTH: usize = 8;
const NAME_WIDTH: usize = 20;

#[derive(Debug, Clone)]
enum Layout {
    /// Padded `LEVEL name` columns styled by the theme, then the message.
    Rich(Theme),
    /// `LEVEL - name - message`, no escapes.
    Plain,
}

/// Human-readable rendering for the interactive console.
#[derive(Debug, Clone)]
pub struct ConsoleFormatter {
    layout: Layout,
}

impl ConsoleFormatter {
    /// Picks the layout from the process-wide capability probe.
    pub fn new() -> Self {
        Self::for_capability(capability::rich_rendering_available())
    }

    pub fn for_capability(rich: bool) -> Self {
        if rich {
            Self::rich(Theme::default())
        } else {
            Self::plain()
        }
    }

    pub fn rich(theme: Theme) -> Self {
        Self {
            layout: Layout::Rich(theme),
        }
    }

    pub fn plain() -> Self {
        Self {
            layout: Layout::Plain,
        }
    }

    pub fn is_rich(&self) -> bool {
        matches!(self.layout, Layout::Rich(_))
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for ConsoleFormatter {
    fn format(&self, record: &LogRecord) -> Result<String, LoggingError> {
        let line = match &self.layout {
            Layout::Rich(theme) => {
                let columns = format!(
                    "{:<level_w$} {:<name_w$}",
                    record.level,
                    record.name,
                    level_w = LEVEL_WIDTH,
                    name_w = NAME_WIDTH
                );
                let style = theme.style_for(record.level.as_str());
                format!("{} {}", style.paint(&columns), record.message)
            }
            Layout::Plain => format!("{} - {} - {}", record.level, record.name, record.message),
        };
        Ok(line)
    }
}
