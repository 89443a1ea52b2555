//! Width-adaptive, styled help rendering.
//!
//! A [`HelpDocument`] is a structured description (headline, usage line,
//! free-text description, titled tables of label/description rows) that
//! renders to aligned terminal text. Narrow terminals get stacked rows;
//! everything else gets a padded label column.

use console::style;
use terminal_size::{Width, terminal_size};

const DEFAULT_WIDTH: usize = 80;

/// Below this column count, table rows stack vertically.
const TINY_WIDTH: usize = 60;

/// Cap on the label column width; longer labels overflow their own row.
const LABEL_CAP: usize = 30;
const LABEL_GUTTER: usize = 2;

const INDENT: &str = "  ";

const FOOTER: &str = "Run with --help for more information on specific commands.";

/// Structured help content for one command, consumed by [`render`](Self::render).
#[derive(Debug, Clone, Default)]
pub struct HelpDocument {
    command_name: String,
    headline: Option<String>,
    usage: Option<String>,
    description: Option<String>,
    tables: Vec<(String, Vec<(String, String)>)>,
}

impl HelpDocument {
    pub fn new(command_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            ..Self::default()
        }
    }

    pub fn headline(mut self, text: impl Into<String>) -> Self {
        self.headline = Some(text.into());
        self
    }

    pub fn usage(mut self, text: impl Into<String>) -> Self {
        self.usage = Some(text.into());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Append a titled table; tables render in the order they were added.
    pub fn table(mut self, title: impl Into<String>, rows: &[(&str, &str)]) -> Self {
        self.tables.push((
            title.into(),
            rows.iter()
                .map(|(label, help)| ((*label).to_owned(), (*help).to_owned()))
                .collect(),
        ));
        self
    }

    /// Render at the given terminal width.
    ///
    /// Section order is fixed: banner and headline, usage, description,
    /// tables as supplied, footer hint, with blank-line separators.
    pub fn render(&self, width: usize) -> String {
        let tiny = width < TINY_WIDTH;
        let mut lines: Vec<String> = Vec::new();

        if let Some(headline) = &self.headline {
            lines.push(String::new());
            lines.push(format!(
                "{INDENT}{} {}",
                style(format!(" {} ", self.command_name)).black().on_green(),
                style(format!("v{}", crate::VERSION)).green(),
            ));
            lines.push(format!("{INDENT}{}", style(headline).dim()));
        }

        if let Some(usage) = &self.usage {
            lines.push(String::new());
            lines.push(format!("{INDENT}{}", style("USAGE").bold()));
            lines.push(format!(
                "{INDENT}{INDENT}{} {}",
                style(&self.command_name).green(),
                usage,
            ));
        }

        if let Some(description) = &self.description {
            lines.push(String::new());
            lines.push(format!("{INDENT}{}", style("DESCRIPTION").bold()));
            lines.push(format!("{INDENT}{INDENT}{description}"));
        }

        for (title, rows) in &self.tables {
            lines.push(String::new());
            lines.push(format!("{INDENT}{}", style(title.to_uppercase()).bold()));

            let padding = label_padding(rows);
            for (label, help) in rows {
                if tiny {
                    lines.push(format!("{INDENT}{INDENT}{}", style(label).bold()));
                    lines.push(format!("{INDENT}{INDENT}{INDENT}{}", style(help).dim()));
                } else {
                    let padded = format!("{label:<padding$}");
                    lines.push(format!(
                        "{INDENT}{INDENT}{}  {}",
                        style(padded).bold(),
                        style(help).dim(),
                    ));
                }
            }
        }

        lines.push(String::new());
        lines.push(format!("{INDENT}{}", style(FOOTER).dim()));

        lines.join("\n")
    }

    /// Render at the current terminal width and emit to stdout in one
    /// write, with a trailing blank line.
    pub fn print(&self) {
        println!("{}\n", self.render(terminal_width()));
    }
}

/// Longest label, capped, plus a fixed gutter.
fn label_padding(rows: &[(String, String)]) -> usize {
    let longest = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    longest.min(LABEL_CAP) + LABEL_GUTTER
}

fn terminal_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => usize::from(w),
        None => DEFAULT_WIDTH,
    }
}
