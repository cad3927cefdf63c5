//! Table output formatting for CLI commands
//!
//! Renders the resolved configuration and the supported environment
//! variables using comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// One row of `config show`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRow {
    /// Environment variable name
    pub var: &'static str,
    /// Field populated by the variable
    pub field: &'static str,
    /// Resolved value, already redacted if needed
    pub value: String,
    /// Whether the value came from the environment rather than the default
    pub from_env: bool,
}

/// One row of `config env`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRow {
    /// Environment variable name
    pub var: &'static str,
    /// `integer` or `string`
    pub kind: String,
    /// Value used when the variable is unset
    pub default: String,
    /// Whether the variable is currently set
    pub is_set: bool,
    /// Whether the current value coerces to the variable's type
    pub valid: bool,
}

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<usize>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<usize>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format the resolved configuration
    pub fn format_config(&self, rows: &[ConfigRow]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Variable").add_attribute(Attribute::Bold),
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

        for row in rows {
            let source = if row.from_env { "env" } else { "default" };
            let source_cell = if self.use_colors && row.from_env {
                Cell::new(source).fg(Color::Cyan)
            } else {
                Cell::new(source)
            };

            table.add_row(vec![
                Cell::new(row.var),
                Cell::new(row.field),
                Cell::new(display_value(&row.value)),
                source_cell,
            ]);
        }

        table.to_string()
    }

    /// Format the supported environment variables
    pub fn format_env_vars(&self, rows: &[EnvRow]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Variable").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Default").add_attribute(Attribute::Bold),
            Cell::new("Set").add_attribute(Attribute::Bold),
        ]);

        for row in rows {
            let set_cell = match (self.use_colors, row.is_set, row.valid) {
                (true, true, false) => Cell::new("invalid").fg(Color::Red),
                (false, true, false) => Cell::new("invalid"),
                (true, true, true) => Cell::new("yes").fg(Color::Green),
                (false, true, true) => Cell::new("yes"),
                (_, false, _) => Cell::new("no"),
            };

            table.add_row(vec![
                Cell::new(row.var),
                Cell::new(&row.kind),
                Cell::new(display_value(&row.default)),
                set_cell,
            ]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(u16::try_from(width).unwrap_or(u16::MAX));
        }

        if !self.use_colors {
            table.force_no_tty();
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty strings are legal values; show them explicitly.
fn display_value(value: &str) -> String {
    if value.is_empty() {
        "\"\"".to_string()
    } else {
        value.to_string()
    }
}

fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TableFormatter {
        TableFormatter::with_config(false, Some(120))
    }

    #[test]
    fn test_format_config_marks_source() {
        let rows = vec![
            ConfigRow {
                var: "TOP_K",
                field: "top_k",
                value: "25".to_string(),
                from_env: true,
            },
            ConfigRow {
                var: "MYSQL_DB",
                field: "rel_db_name",
                value: "mysql".to_string(),
                from_env: false,
            },
        ];

        let output = plain().format_config(&rows);
        assert!(output.contains("Variable"));
        assert!(output.contains("TOP_K"));
        assert!(output.contains("25"));
        assert!(output.contains("env"));
        assert!(output.contains("default"));
    }

    #[test]
    fn test_empty_value_is_visible() {
        let rows = vec![ConfigRow {
            var: "DATA_PATH",
            field: "data_path",
            value: String::new(),
            from_env: true,
        }];

        assert!(plain().format_config(&rows).contains("\"\""));
    }

    #[test]
    fn test_format_env_vars() {
        let rows = vec![EnvRow {
            var: "logs_num",
            kind: "integer".to_string(),
            default: "0".to_string(),
            is_set: false,
            valid: true,
        }];

        let output = plain().format_env_vars(&rows);
        assert!(output.contains("logs_num"));
        assert!(output.contains("integer"));
        assert!(output.contains("no"));
    }

    #[test]
    fn test_format_env_vars_marks_invalid_value() {
        let rows = vec![EnvRow {
            var: "MILVUS_PORT",
            kind: "integer".to_string(),
            default: "19530".to_string(),
            is_set: true,
            valid: false,
        }];

        let output = plain().format_env_vars(&rows);
        let line = output.lines().find(|l| l.contains("MILVUS_PORT")).unwrap();
        assert!(line.contains("invalid"));
    }
}
