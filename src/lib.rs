pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CartCommand, CliConfig};
pub use config::ResolvedConfig;

pub use adapters::{ConsoleToast, HttpCatalog, LocalStorage};
pub use crate::core::cart::{CartStore, CART_KEY};
pub use utils::error::{CartError, Result};
