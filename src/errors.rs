//! # Error Types Module
//!
//! Parsing, conversion and combination never fail; errors only arise when
//! reading configuration and rule files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ShoppingListError {
    /// A file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An environment variable is set but unusable
    #[error("Invalid environment variable {name}: {source}")]
    Env {
        name: &'static str,
        #[source]
        source: std::env::VarError,
    },
}

pub type Result<T> = std::result::Result<T, ShoppingListError>;
