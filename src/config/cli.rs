use crate::config::toml_config::FileConfig;
use crate::config::{
    ResolvedConfig, DEFAULT_API_BASE_URL, DEFAULT_STORAGE_PATH, DEFAULT_TIMEOUT_SECONDS,
};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cart")]
#[command(about = "Storefront shopping cart, persisted locally and stock-checked remotely")]
pub struct CliConfig {
    /// Base URL of the product/stock API
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Directory holding the persisted cart
    #[arg(long)]
    pub storage_path: Option<String>,

    /// Request timeout for catalog calls, in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Optional TOML config file; CLI flags take precedence
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CartCommand {
    /// Add one unit of a product to the cart
    Add { product_id: u64 },
    /// Remove a product from the cart
    Remove { product_id: u64 },
    /// Set the quantity of a product already in the cart
    Set {
        product_id: u64,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Print the current cart
    Show,
}

impl CliConfig {
    /// Merges flags, the optional config file, and defaults, then validates.
    /// Precedence: CLI flag > file value > default.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };

        let resolved = ResolvedConfig {
            api_base_url: self
                .api_base_url
                .clone()
                .or_else(|| file.api_base_url())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            storage_path: self
                .storage_path
                .clone()
                .or_else(|| file.storage_path())
                .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string()),
            timeout_seconds: self
                .timeout_seconds
                .or_else(|| file.timeout_seconds())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        };

        resolved.validate()?;
        Ok(resolved)
    }
}
