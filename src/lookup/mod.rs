//! Product lookups
//!
//! A [`client::ProductLookup`] turns a code into a [`record::ProductRecord`].
//! Two backends exist: the product service (`/api/scan/{code}`) and the
//! public Open Food Facts API with client-side normalisation.

pub(crate) mod additives;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod openfoodfacts;
pub(crate) mod record;

pub mod api;

#[cfg(test)]
mod tests;
