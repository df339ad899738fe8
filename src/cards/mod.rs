//! Card system: historical events and the catalog they are dealt from.
//!
//! ## Key Types
//!
//! - `EventId`: Catalog-unique event identifier
//! - `HistoricalEvent`: Immutable card data (title, year, description)
//! - `Catalog`: Ordered, read-only deck with id lookup

mod builtin;
pub mod catalog;
pub mod event;

pub use catalog::{Catalog, MIN_CATALOG_SIZE};
pub use event::{EventId, HistoricalEvent};
