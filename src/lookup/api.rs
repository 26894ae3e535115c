//! Lookup API
//!
//! Public surface of the product lookup subsystem.

pub use crate::lookup::additives::AdditiveCatalog;
pub use crate::lookup::client::{HttpLookupClient, ProductLookup};
pub use crate::lookup::error::{LookupError, LookupResult};
pub use crate::lookup::openfoodfacts::{OpenFoodFactsLookup, DEFAULT_OFF_BASE_URL};
pub use crate::lookup::record::{LookupOutcome, ProductRecord, VegStatus};
