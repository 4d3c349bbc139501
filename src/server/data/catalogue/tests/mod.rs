use pulsepoint_test_utils::prelude::*;

use super::{
    commodity::CommodityRepository,
    moon::MoonRepository,
    planet::PlanetRepository,
    space_station::{SpaceStationLinks, SpaceStationRepository},
    star_system::StarSystemRepository,
};

mod space_station;
