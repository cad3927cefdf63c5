//! `molsearch config` subcommands

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::output::{ConfigRow, EnvRow, TableFormatter};
use crate::cli::types::ConfigCommands;
use crate::domain::models::ServiceConfig;
use crate::infrastructure::config::env::parse_integer;
use crate::infrastructure::config::{EnvLookup, VarKind, SUPPORTED_VARS};

/// Output encoding chosen by the global and per-command flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// comfy-table rendering
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

/// Run a `config` subcommand against an already loaded configuration.
pub fn execute(
    command: &ConfigCommands,
    config: &ServiceConfig,
    lookup: &impl EnvLookup,
    json: bool,
) -> Result<()> {
    let formatter = TableFormatter::new();
    let output = match command {
        ConfigCommands::Show { show_secrets, yaml } => {
            let format = match (*yaml, json) {
                (true, _) => OutputFormat::Yaml,
                (false, true) => OutputFormat::Json,
                (false, false) => OutputFormat::Table,
            };
            render_show(config, lookup, *show_secrets, format, &formatter)?
        }
        ConfigCommands::Check => render_check(config, json)?,
        ConfigCommands::Env => render_env(lookup, json, &formatter)?,
    };

    println!("{output}");
    Ok(())
}

/// Run `config env`.
///
/// Needs no loaded configuration, so it still works when a variable is
/// malformed and is the way to find out which one.
pub fn execute_env(lookup: &impl EnvLookup, json: bool) -> Result<()> {
    let output = render_env(lookup, json, &TableFormatter::new())?;
    println!("{output}");
    Ok(())
}

/// Render `config show`
pub fn render_show(
    config: &ServiceConfig,
    lookup: &impl EnvLookup,
    show_secrets: bool,
    format: OutputFormat,
    formatter: &TableFormatter,
) -> Result<String> {
    let shown = if show_secrets {
        config.clone()
    } else {
        config.redacted()
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&shown).context("failed to serialize configuration")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&shown).context("failed to serialize configuration")
        }
        OutputFormat::Table => {
            let rows: Vec<ConfigRow> = SUPPORTED_VARS
                .iter()
                .map(|var| ConfigRow {
                    var: var.name,
                    field: var.field,
                    value: var.value_in(&shown),
                    from_env: lookup.get(var.name).is_some(),
                })
                .collect();
            Ok(formatter.format_config(&rows))
        }
    }
}

/// Render `config check`.
///
/// Reaching this point means loading already succeeded; failures exit
/// earlier through the startup error path.
pub fn render_check(config: &ServiceConfig, json: bool) -> Result<String> {
    let default_credentials = config.uses_default_credentials();

    if json {
        return serde_json::to_string_pretty(&json!({
            "status": "ok",
            "vector_db": config.vector_db_endpoint(),
            "rel_db": config.rel_db_endpoint(),
            "default_credentials": default_credentials,
        }))
        .context("failed to serialize check result");
    }

    let mut lines = vec![
        "configuration OK".to_string(),
        format!("  vector database: {}", config.vector_db_endpoint()),
        format!("  relational database: {}", config.rel_db_endpoint()),
    ];
    if default_credentials {
        lines.push("  warning: MySQL is using the built-in default credentials".to_string());
    }

    Ok(lines.join("\n"))
}

/// Render `config env`
pub fn render_env(
    lookup: &impl EnvLookup,
    json: bool,
    formatter: &TableFormatter,
) -> Result<String> {
    let rows: Vec<EnvRow> = SUPPORTED_VARS
        .iter()
        .map(|var| {
            let raw = lookup.get(var.name);
            let valid = match (&raw, var.kind) {
                (Some(raw), VarKind::Integer) => parse_integer(var.name, raw).is_ok(),
                _ => true,
            };
            EnvRow {
                var: var.name,
                kind: var.kind.to_string(),
                default: var.default_value(),
                is_set: raw.is_some(),
                valid,
            }
        })
        .collect();

    if json {
        let entries: Vec<_> = rows
            .iter()
            .map(|row| {
                json!({
                    "name": row.var,
                    "type": row.kind,
                    "default": row.default,
                    "set": row.is_set,
                    "valid": row.valid,
                })
            })
            .collect();
        return serde_json::to_string_pretty(&entries).context("failed to serialize variables");
    }

    Ok(formatter.format_env_vars(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::REDACTED;
    use std::collections::HashMap;

    fn plain() -> TableFormatter {
        TableFormatter::with_config(false, Some(160))
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_show_json_masks_password() {
        let config = ServiceConfig::default();
        let output =
            render_show(&config, &env(&[]), false, OutputFormat::Json, &plain()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["rel_db_password"], REDACTED);
        assert_eq!(parsed["vector_dimension"], 512);
        assert_eq!(parsed["rel_db_port"], 3306);
    }

    #[test]
    fn test_show_json_with_secrets() {
        let config = ServiceConfig::default();
        let output = render_show(&config, &env(&[]), true, OutputFormat::Json, &plain()).unwrap();

        let parsed: ServiceConfig = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_show_yaml() {
        let config = ServiceConfig {
            top_k: 25,
            ..Default::default()
        };
        let output = render_show(&config, &env(&[]), false, OutputFormat::Yaml, &plain()).unwrap();

        let parsed: ServiceConfig = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.top_k, 25);
        assert_eq!(parsed.rel_db_password, REDACTED);
    }

    #[test]
    fn test_show_table_reports_env_source() {
        let vars = env(&[("TOP_K", "25")]);
        let config = ServiceConfig {
            top_k: 25,
            ..Default::default()
        };
        let output = render_show(&config, &vars, false, OutputFormat::Table, &plain()).unwrap();

        let top_k_line = output.lines().find(|l| l.contains("TOP_K")).unwrap();
        assert!(top_k_line.contains("25"));
        assert!(top_k_line.contains("env"));
        assert!(!output.contains("123456"));
    }

    #[test]
    fn test_check_flags_default_credentials() {
        let text = render_check(&ServiceConfig::default(), false).unwrap();
        assert!(text.starts_with("configuration OK"));
        assert!(text.contains("default credentials"));

        let custom = ServiceConfig {
            rel_db_password: "s3cret".to_string(),
            ..Default::default()
        };
        let text = render_check(&custom, false).unwrap();
        assert!(!text.contains("default credentials"));
    }

    #[test]
    fn test_check_json() {
        let output = render_check(&ServiceConfig::default(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["vector_db"], "127.0.0.1:19530");
        assert_eq!(parsed["default_credentials"], true);
    }

    #[test]
    fn test_env_json_lists_every_variable() {
        let output = render_env(&env(&[("logs_num", "3")]), true, &plain()).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed.len(), SUPPORTED_VARS.len());
        let logs = parsed.iter().find(|v| v["name"] == "logs_num").unwrap();
        assert_eq!(logs["type"], "integer");
        assert_eq!(logs["default"], "0");
        assert_eq!(logs["set"], true);

        let host = parsed.iter().find(|v| v["name"] == "MILVUS_HOST").unwrap();
        assert_eq!(host["set"], false);
        assert_eq!(host["default"], "127.0.0.1");
    }

    #[test]
    fn test_env_flags_malformed_integer() {
        let vars = env(&[("MILVUS_PORT", "abc"), ("TOP_K", "1_000"), ("MYSQL_PWD", "abc")]);
        let output = render_env(&vars, true, &plain()).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        let entry = |name: &str| parsed.iter().find(|v| v["name"] == name).unwrap().clone();
        assert_eq!(entry("MILVUS_PORT")["set"], true);
        assert_eq!(entry("MILVUS_PORT")["valid"], false);
        assert_eq!(entry("TOP_K")["valid"], true);
        assert_eq!(entry("MYSQL_PWD")["valid"], true);
        assert_eq!(entry("MILVUS_HOST")["valid"], true);

        let table = render_env(&vars, false, &plain()).unwrap();
        let port_line = table.lines().find(|l| l.contains("MILVUS_PORT")).unwrap();
        assert!(port_line.contains("invalid"));
    }
}
