//! Endpoint groups exposed through [`Client`](crate::Client).

pub mod commodity;
pub mod universe;
