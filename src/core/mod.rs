pub mod cart;

pub use crate::domain::model::CartLine;
pub use crate::domain::ports::{CatalogApi, Notifier, Storage};
