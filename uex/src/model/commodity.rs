use serde::{Deserialize, Serialize};

/// Commodity as listed by `GET /commodities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commodity {
    pub id: i64,
    pub name: String,
    pub code: String,
    /// Commodity category, e.g. `Metal`, `Gas`, `Temporary`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub price_buy: f64,
    #[serde(default)]
    pub price_sell: f64,
    #[serde(default)]
    pub is_illegal: i16,
    #[serde(default)]
    pub is_available_live: i16,
    #[serde(default)]
    pub is_temporary: i16,
    #[serde(default)]
    pub is_sellable: i16,
}
