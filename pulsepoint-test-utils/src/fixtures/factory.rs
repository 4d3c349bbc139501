//! Factories for UEX wire models.
//!
//! Every factory returns a record that passes the synchronisation filters; tests adjust the
//! fields they care about afterwards.

use uex::model::{
    commodity::Commodity,
    universe::{Moon, Planet, SpaceStation, StarSystem},
};

/// Sellable, live, non-temporary commodity.
pub fn mock_commodity(code: &str, name: &str) -> Commodity {
    Commodity {
        id: 1,
        name: name.to_string(),
        code: code.to_string(),
        kind: "Metal".to_string(),
        price_buy: 100.0,
        price_sell: 120.0,
        is_illegal: 0,
        is_available_live: 1,
        is_temporary: 0,
        is_sellable: 1,
    }
}

/// Available and visible star system.
pub fn mock_star_system(id: i64, code: &str, name: &str) -> StarSystem {
    StarSystem {
        id,
        name: name.to_string(),
        code: code.to_string(),
        is_available: 1,
        is_visible: 1,
        jurisdiction_name: Some("United Empire of Earth".to_string()),
        faction_name: Some("United Empire of Earth".to_string()),
    }
}

pub fn mock_planet(id: i64, star_system_id: i64, code: &str, name: &str) -> Planet {
    Planet {
        id,
        id_star_system: star_system_id,
        name: name.to_string(),
        code: code.to_string(),
        jurisdiction_name: Some("Crusader Industries".to_string()),
        faction_name: None,
    }
}

pub fn mock_moon(id: i64, star_system_id: i64, code: &str, name: &str, planet_name: &str) -> Moon {
    Moon {
        id,
        id_star_system: star_system_id,
        id_planet: 0,
        name: name.to_string(),
        code: code.to_string(),
        planet_name: Some(planet_name.to_string()),
        jurisdiction_name: None,
        faction_name: None,
    }
}

/// Space station orbiting the given planet and moon, if any.
pub fn mock_space_station(
    id: i64,
    star_system_id: i64,
    name: &str,
    star_system_name: &str,
    planet_name: Option<&str>,
    moon_name: Option<&str>,
) -> SpaceStation {
    SpaceStation {
        id,
        id_star_system: star_system_id,
        name: name.to_string(),
        code: String::new(),
        star_system_name: Some(star_system_name.to_string()),
        planet_name: planet_name.map(str::to_string),
        moon_name: moon_name.map(str::to_string),
        pad_types: Some("XS,S,M,L".to_string()),
        jurisdiction_name: None,
        faction_name: None,
        has_trade_terminal: 1,
        has_refinery: 0,
        orbit_name: planet_name.map(str::to_string),
        is_lagrange: 0,
    }
}
