//! PulsePoint keeps Star Citizen trade reference data from the UEX API in sync with a local
//! database and tracks commodity stock levels at player outposts.

pub mod model;
pub mod server;
