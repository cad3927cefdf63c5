use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder shown instead of the relational database password.
pub const REDACTED: &str = "******";

/// Resolved configuration for the molecular similarity search server.
///
/// Built once at startup by [`ConfigLoader`](crate::infrastructure::config::ConfigLoader)
/// and handed to every component by reference. Nothing in this crate mutates
/// a `ServiceConfig` after it has been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ServiceConfig {
    /// Milvus host name or IP address
    pub vector_db_host: String,

    /// Milvus TCP port
    pub vector_db_port: i64,

    /// Width of the molecular fingerprint embeddings
    pub vector_dimension: i64,

    /// Milvus `index_file_size` tuning parameter
    pub index_file_size: i64,

    /// Similarity metric identifier, e.g. `JACCARD`
    pub metric_type: String,

    /// Milvus collection searched when a request names none
    pub default_collection: String,

    /// Number of nearest results returned per query
    pub top_k: i64,

    /// MySQL host name or IP address
    pub rel_db_host: String,

    /// MySQL TCP port
    pub rel_db_port: i64,

    /// MySQL user
    pub rel_db_user: String,

    /// MySQL password, stored as given
    pub rel_db_password: String,

    /// MySQL schema name
    pub rel_db_name: String,

    /// Directory receiving uploaded molecule files
    pub upload_path: String,

    /// Directory holding working data
    pub data_path: String,

    /// Number of rotated log files to keep (0 keeps every file)
    pub log_retention_count: i64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_vector_db_port() -> i64 {
    19530
}

const fn default_vector_dimension() -> i64 {
    512
}

const fn default_index_file_size() -> i64 {
    1024
}

fn default_metric_type() -> String {
    "JACCARD".to_string()
}

fn default_collection() -> String {
    "milvus_mol_search".to_string()
}

const fn default_top_k() -> i64 {
    10
}

const fn default_rel_db_port() -> i64 {
    3306
}

fn default_rel_db_user() -> String {
    "root".to_string()
}

// Plaintext on purpose: deployments are expected to override it.
fn default_rel_db_password() -> String {
    "123456".to_string()
}

fn default_rel_db_name() -> String {
    "mysql".to_string()
}

fn default_upload_path() -> String {
    "tmp/mol-data".to_string()
}

fn default_data_path() -> String {
    "tmp/".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            vector_db_host: default_host(),
            vector_db_port: default_vector_db_port(),
            vector_dimension: default_vector_dimension(),
            index_file_size: default_index_file_size(),
            metric_type: default_metric_type(),
            default_collection: default_collection(),
            top_k: default_top_k(),
            rel_db_host: default_host(),
            rel_db_port: default_rel_db_port(),
            rel_db_user: default_rel_db_user(),
            rel_db_password: default_rel_db_password(),
            rel_db_name: default_rel_db_name(),
            upload_path: default_upload_path(),
            data_path: default_data_path(),
            log_retention_count: 0,
        }
    }
}

impl ServiceConfig {
    /// `host:port` of the Milvus server
    pub fn vector_db_endpoint(&self) -> String {
        format!("{}:{}", self.vector_db_host, self.vector_db_port)
    }

    /// `host:port` of the MySQL server
    pub fn rel_db_endpoint(&self) -> String {
        format!("{}:{}", self.rel_db_host, self.rel_db_port)
    }

    /// Upload directory as a path
    pub fn upload_dir(&self) -> &Path {
        Path::new(&self.upload_path)
    }

    /// Data directory as a path
    pub fn data_dir(&self) -> &Path {
        Path::new(&self.data_path)
    }

    /// Whether the MySQL credentials are still the built-in `root`/`123456` pair.
    pub fn uses_default_credentials(&self) -> bool {
        self.rel_db_user == default_rel_db_user()
            && self.rel_db_password == default_rel_db_password()
    }

    /// Copy of this configuration with the password masked, for display.
    pub fn redacted(&self) -> Self {
        Self {
            rel_db_password: REDACTED.to_string(),
            ..self.clone()
        }
    }
}
