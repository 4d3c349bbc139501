//! Wire models served by the UEX catalogue API.
//!
//! Flag fields are kept as the small integers UEX sends (`1` meaning true); callers decide
//! how to interpret them.

pub mod commodity;
pub mod response;
pub mod universe;
