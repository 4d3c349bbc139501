//! Business logic services.
//!
//! - `sync` - UEX reference data synchronisation and its single-flight guard
//! - `filter` - inclusion rules and normalisation of UEX records
//! - `outpost` - outpost writes publishing record events
//! - `derived` - stock and change rows generated from those events
//! - `retry` - retry with exponential backoff for fetch-and-persist operations

pub mod derived;
pub mod filter;
pub mod outpost;
pub mod retry;
pub mod sync;

#[cfg(test)]
mod tests;
