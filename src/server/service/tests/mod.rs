use pulsepoint_test_utils::prelude::*;

use crate::server::{
    data::outpost::{
        commodity_change::CommodityChangeRepository,
        outpost_commodity::OutpostCommodityRepository,
    },
    model::event::RecordEvent,
    service::{derived::DerivedRecordService, outpost::OutpostService},
    worker::{EventQueue, RecordEventHandler},
};

mod outpost;
