//! Card system: definitions, instances, and catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardKind`: Closed set of kinds, parsed once when card data loads
//! - `CardDefinition`: Printed card data
//! - `HandCard` / `BoardCard`: The two runtime shapes of an instance
//! - `CardCatalog`: Definition lookup

pub mod definition;
pub mod instance;
pub mod catalog;

pub use definition::{CardDefinition, CardId, CardKind, UnknownCardKind};
pub use instance::{BoardCard, DamageReport, HandCard};
pub use catalog::CardCatalog;
