// Adapters layer: concrete implementations for the external systems the
// cart talks to (catalog API over HTTP, file-backed storage, terminal toast).

pub mod console_toast;
pub mod http_catalog;
pub mod local_storage;

pub use console_toast::ConsoleToast;
pub use http_catalog::HttpCatalog;
pub use local_storage::LocalStorage;
