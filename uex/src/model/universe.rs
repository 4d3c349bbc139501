use serde::{Deserialize, Serialize};

/// Star system as listed by `GET /star_systems`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub is_available: i16,
    #[serde(default)]
    pub is_visible: i16,
    pub jurisdiction_name: Option<String>,
    pub faction_name: Option<String>,
}

/// Planet as listed by `GET /planets?id_star_system=<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: i64,
    #[serde(default)]
    pub id_star_system: i64,
    pub name: String,
    pub code: String,
    pub jurisdiction_name: Option<String>,
    pub faction_name: Option<String>,
}

/// Moon as listed by `GET /moons?id_star_system=<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moon {
    pub id: i64,
    #[serde(default)]
    pub id_star_system: i64,
    #[serde(default)]
    pub id_planet: i64,
    pub name: String,
    pub code: String,
    /// Name of the planet the moon orbits.
    pub planet_name: Option<String>,
    pub jurisdiction_name: Option<String>,
    pub faction_name: Option<String>,
}

/// Space station as listed by `GET /space_stations?id_star_system=<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceStation {
    pub id: i64,
    #[serde(default)]
    pub id_star_system: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    /// Name of the owning star system.
    pub star_system_name: Option<String>,
    pub planet_name: Option<String>,
    pub moon_name: Option<String>,
    pub pad_types: Option<String>,
    pub jurisdiction_name: Option<String>,
    pub faction_name: Option<String>,
    #[serde(default)]
    pub has_trade_terminal: i16,
    #[serde(default)]
    pub has_refinery: i16,
    pub orbit_name: Option<String>,
    #[serde(default)]
    pub is_lagrange: i16,
}
