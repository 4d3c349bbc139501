//! Repositories for reference data synchronised from UEX.
//!
//! Records are reconciled by natural key: `code` for commodities, star systems, planets and
//! moons, `name` for space stations. `update` never changes the natural key.

pub mod commodity;
pub mod moon;
pub mod planet;
pub mod space_station;
pub mod star_system;

#[cfg(test)]
mod tests;
