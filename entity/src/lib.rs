//! Database entities for the PulsePoint record store.

pub mod prelude;

pub mod commodity;
pub mod commodity_change;
pub mod moon;
pub mod outpost;
pub mod outpost_commodity;
pub mod planet;
pub mod space_station;
pub mod star_system;
