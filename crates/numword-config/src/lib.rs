#![forbid(unsafe_code)]

mod error;
mod loader;
mod model;

pub use crate::error::ConfigError;
pub use crate::loader::{LoadedTable, load_dir, load_table};
pub use crate::model::{CurrencyFileEntry, LanguageStyle, ScaleFileEntry, TableFile};
