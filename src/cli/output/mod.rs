pub mod table;

pub use table::{ConfigRow, EnvRow, TableFormatter};
