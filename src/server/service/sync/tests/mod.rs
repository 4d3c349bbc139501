use pulsepoint_test_utils::prelude::*;

use crate::server::{
    error::{sync::SyncError, Error},
    service::sync::{
        commodity::CommoditySyncService, star_system::StarSystemSyncService, SyncKind,
        SyncLocks, SyncService,
    },
};

mod locks;
mod star_system;
