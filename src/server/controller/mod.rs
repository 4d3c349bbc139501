//! HTTP controller endpoints for the PulsePoint API.
//!
//! Controllers extract request data, call into services and map the outcome to a response.
//! Admin routes are guarded by [`auth::require_admin`], applied as a layer in the router.

pub mod auth;
pub mod outpost;
pub mod sync;
