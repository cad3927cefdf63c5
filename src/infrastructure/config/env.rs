//! Environment variable sources and the table of supported variables

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use figment::value::{Dict, Map, Value};
use figment::{Metadata, Profile, Provider};
use tracing::debug;

use super::loader::ConfigError;
use crate::domain::models::ServiceConfig;

/// Read access to a set of environment variables.
///
/// The loader only ever asks for the names in [`SUPPORTED_VARS`]. Missing
/// variables return `None`; a variable set to the empty string returns
/// `Some(String::new())`.
pub trait EnvLookup {
    /// Value of `name`, if set
    fn get(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvLookup for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// How a variable's raw string is turned into a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Parsed as a signed 64-bit integer
    Integer,
    /// Taken verbatim
    Text,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Text => write!(f, "string"),
        }
    }
}

/// One supported environment variable and the field it feeds.
#[derive(Clone, Copy)]
pub struct EnvVar {
    /// Variable name, case-sensitive
    pub name: &'static str,
    /// `ServiceConfig` field populated by the variable
    pub field: &'static str,
    /// Coercion applied to the raw value
    pub kind: VarKind,
    read: fn(&ServiceConfig) -> String,
}

impl fmt::Debug for EnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVar")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl EnvVar {
    /// Current value of the field this variable feeds, rendered as text
    pub fn value_in(&self, config: &ServiceConfig) -> String {
        (self.read)(config)
    }

    /// Value used when the variable is not set
    pub fn default_value(&self) -> String {
        self.value_in(&ServiceConfig::default())
    }
}

/// Every environment variable the loader reads, in declaration order.
pub static SUPPORTED_VARS: [EnvVar; 15] = [
    EnvVar {
        name: "MILVUS_HOST",
        field: "vector_db_host",
        kind: VarKind::Text,
        read: |c| c.vector_db_host.clone(),
    },
    EnvVar {
        name: "MILVUS_PORT",
        field: "vector_db_port",
        kind: VarKind::Integer,
        read: |c| c.vector_db_port.to_string(),
    },
    EnvVar {
        name: "VECTOR_DIMENSION",
        field: "vector_dimension",
        kind: VarKind::Integer,
        read: |c| c.vector_dimension.to_string(),
    },
    EnvVar {
        name: "INDEX_FILE_SIZE",
        field: "index_file_size",
        kind: VarKind::Integer,
        read: |c| c.index_file_size.to_string(),
    },
    EnvVar {
        name: "METRIC_TYPE",
        field: "metric_type",
        kind: VarKind::Text,
        read: |c| c.metric_type.clone(),
    },
    EnvVar {
        name: "DEFAULT_TABLE",
        field: "default_collection",
        kind: VarKind::Text,
        read: |c| c.default_collection.clone(),
    },
    EnvVar {
        name: "TOP_K",
        field: "top_k",
        kind: VarKind::Integer,
        read: |c| c.top_k.to_string(),
    },
    EnvVar {
        name: "MYSQL_HOST",
        field: "rel_db_host",
        kind: VarKind::Text,
        read: |c| c.rel_db_host.clone(),
    },
    EnvVar {
        name: "MYSQL_PORT",
        field: "rel_db_port",
        kind: VarKind::Integer,
        read: |c| c.rel_db_port.to_string(),
    },
    EnvVar {
        name: "MYSQL_USER",
        field: "rel_db_user",
        kind: VarKind::Text,
        read: |c| c.rel_db_user.clone(),
    },
    EnvVar {
        name: "MYSQL_PWD",
        field: "rel_db_password",
        kind: VarKind::Text,
        read: |c| c.rel_db_password.clone(),
    },
    EnvVar {
        name: "MYSQL_DB",
        field: "rel_db_name",
        kind: VarKind::Text,
        read: |c| c.rel_db_name.clone(),
    },
    EnvVar {
        name: "UPLOAD_PATH",
        field: "upload_path",
        kind: VarKind::Text,
        read: |c| c.upload_path.clone(),
    },
    EnvVar {
        name: "DATA_PATH",
        field: "data_path",
        kind: VarKind::Text,
        read: |c| c.data_path.clone(),
    },
    EnvVar {
        name: "logs_num",
        field: "log_retention_count",
        kind: VarKind::Integer,
        read: |c| c.log_retention_count.to_string(),
    },
];

/// Parse an integer variable the way the server always has: surrounding
/// whitespace is ignored, a leading sign is allowed and single underscores
/// may group digits (`1_000`).
pub fn parse_integer(var: &'static str, raw: &str) -> Result<i64, ConfigError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    // Misplaced underscores are left in so the parse below rejects them.
    let grouped = !digits.starts_with('_') && !digits.ends_with('_') && !digits.contains("__");
    let candidate = if grouped {
        trimmed.replace('_', "")
    } else {
        trimmed.to_string()
    };

    candidate
        .parse::<i64>()
        .map_err(|source| ConfigError::InvalidConfigValue {
            var,
            value: raw.to_string(),
            source,
        })
}

/// Figment provider holding the variables that were set, already coerced.
///
/// Coercion happens in [`EnvOverrides::capture`] so a malformed integer is
/// reported against the variable name rather than the field name.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    values: Dict,
}

impl EnvOverrides {
    /// Read and coerce every supported variable present in `lookup`.
    pub fn capture(lookup: &impl EnvLookup) -> Result<Self, ConfigError> {
        let mut values = Dict::new();

        for var in &SUPPORTED_VARS {
            let Some(raw) = lookup.get(var.name) else {
                continue;
            };

            let value = match var.kind {
                VarKind::Integer => Value::from(parse_integer(var.name, &raw)?),
                VarKind::Text => Value::from(raw),
            };

            debug!(var = var.name, field = var.field, "environment override");
            values.insert(var.field.to_string(), value);
        }

        Ok(Self { values })
    }

    /// Number of variables that were set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no supported variable was set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Provider for EnvOverrides {
    fn metadata(&self) -> Metadata {
        Metadata::named("environment variable(s)")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Profile::Default.collect(self.values.clone()))
    }
}
