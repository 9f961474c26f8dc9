//! Builds the `site-index.json` the docs site search widget loads.
//!
//! Pages under the zola content root are scanned for their `+++` front
//! matter, mapped to the url zola serves them at, and written out as a JSON
//! array of `{ title, url, description }` records.

pub mod config;
pub mod diff;
pub mod error;
pub mod front_matter;
pub mod markdown_file;
pub mod route;
pub mod site_index;
pub mod util;

pub use config::{SiteConfig, DEFAULT_BASE_URL};
pub use error::IndexError;
pub use site_index::{IndexEntry, SiteIndex};
