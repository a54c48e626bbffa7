// Price Machine - Core Library
// Exposes the catalog pipeline for the CLI binary and tests

pub mod catalog;
pub mod columns;
pub mod loader;
pub mod report;
pub mod search;

// Re-export commonly used types
pub use catalog::{Catalog, Record};
pub use columns::{resolve_columns, ColumnMap, MASS_HEADERS, NAME_HEADERS, PRICE_HEADERS};
pub use loader::{discover_price_files, load_prices, DEFAULT_PRICES_DIR};
pub use report::{export_to_html, DEFAULT_REPORT_FILE};
pub use search::{render_matches, search, SearchMatch};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
