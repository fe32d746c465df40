//! Launch Dataset
//!
//! The in-memory launch table and its CSV loader.
//!
//! ## Components
//!
//! - **Types**: `LaunchRecord`, `LaunchTable`, `SiteSelector`, `PayloadRange`
//! - **Loader**: Reads and validates the CSV file once at startup
//! - **Error**: `DatasetError` for load failures and invalid ranges

mod error;
pub mod loader;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{load_csv, read_csv};
pub use types::{
    LaunchRecord, LaunchTable, PayloadRange, SiteSelector, ALL_SITES, KNOWN_SITES,
};
