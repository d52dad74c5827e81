//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn action_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn engine_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn highlight_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn location_style(&self) -> ColoredString;
    fn location_titlebar_style(&self) -> ColoredString;
    fn quest_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn status_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn transition_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn action_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn engine_style(&self) -> ColoredString {
        self.dimmed().truecolor(160, 160, 160)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn highlight_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn location_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn location_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn quest_style(&self) -> ColoredString {
        self.truecolor(220, 40, 220)
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn status_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn transition_style(&self) -> ColoredString {
        self.italic().truecolor(150, 230, 30)
    }
}

impl GameStyle for String {
    fn action_style(&self) -> ColoredString {
        self.as_str().action_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn engine_style(&self) -> ColoredString {
        self.as_str().engine_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn highlight_style(&self) -> ColoredString {
        self.as_str().highlight_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn location_style(&self) -> ColoredString {
        self.as_str().location_style()
    }
    fn location_titlebar_style(&self) -> ColoredString {
        self.as_str().location_titlebar_style()
    }
    fn quest_style(&self) -> ColoredString {
        self.as_str().quest_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn status_style(&self) -> ColoredString {
        self.as_str().status_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn transition_style(&self) -> ColoredString {
        self.as_str().transition_style()
    }
}

/// Wrapping options for ordinary paragraphs, sized to the terminal.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth())
}

/// Wrapping options for list entries and other indented text.
pub fn indented_block() -> Options<'static> {
    Options::new(termwidth()).initial_indent("  ").subsequent_indent("    ")
}
