//! Inclusion rules and normalisation applied to UEX records before they are persisted.
//!
//! Flags arrive as small integers where `1` means true. Filtering compares those integers
//! directly; conversion to `bool` only happens when a record is written, through [`as_flag`].

use uex::model::{commodity::Commodity, universe::StarSystem};

const TEMPORARY_KIND: &str = "Temporary";
const EVENT_COMMODITY_MARKER: &str = "year of the";

/// Converts a UEX integer flag, only `1` is true.
pub fn as_flag(value: i16) -> bool {
    value == 1
}

/// Drops commodities that can't be traded at outposts and normalises the kind of ores
/// and raw materials.
///
/// A commodity is dropped when, checked in order:
/// 1. it is not available live, is temporary, or is not sellable
/// 2. its kind is `Temporary` and its sell price is zero
/// 3. its name contains "year of the" (seasonal event items)
///
/// Kept commodities whose name contains "ore" get the kind `Ore`, then those whose name
/// contains "raw" get the kind `Raw`. Both checks are case-insensitive and a name matching
/// both ends up as `Raw`.
pub fn filter_commodities(commodities: Vec<Commodity>) -> Vec<Commodity> {
    commodities
        .into_iter()
        .filter(|commodity| !is_excluded(commodity))
        .map(normalize_kind)
        .collect()
}

/// Keeps star systems that are both available and visible.
pub fn filter_star_systems(star_systems: Vec<StarSystem>) -> Vec<StarSystem> {
    star_systems
        .into_iter()
        .filter(|star_system| star_system.is_available == 1 && star_system.is_visible == 1)
        .collect()
}

fn is_excluded(commodity: &Commodity) -> bool {
    if commodity.is_available_live == 0 || commodity.is_temporary == 1 || commodity.is_sellable == 0
    {
        return true;
    }

    if commodity.kind == TEMPORARY_KIND && commodity.price_sell == 0.0 {
        return true;
    }

    commodity
        .name
        .to_lowercase()
        .contains(EVENT_COMMODITY_MARKER)
}

fn normalize_kind(mut commodity: Commodity) -> Commodity {
    let name = commodity.name.to_lowercase();

    if name.contains("ore") {
        commodity.kind = "Ore".to_string();
    }
    if name.contains("raw") {
        commodity.kind = "Raw".to_string();
    }

    commodity
}
