//! Server application core modules.
//!
//! This module contains the server side of PulsePoint: HTTP routing, admin authentication,
//! database access, UEX synchronisation, the derived record event worker and cron scheduling.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod worker;
