use pulsepoint_test_utils::prelude::*;

use super::{
    commodity_change::CommodityChangeRepository, outpost::OutpostRepository,
    outpost_commodity::OutpostCommodityRepository,
};

mod commodity_change;
