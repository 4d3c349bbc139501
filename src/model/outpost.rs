use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an outpost
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOutpostDto {
    pub name: String,
    /// Record ID of the star system the outpost is located in
    #[serde(default)]
    pub star_system_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OutpostDto {
    pub id: i32,
    pub name: String,
    pub star_system_id: Option<i32>,
}

/// Request body for setting the stock amount of an outpost commodity
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateOutpostCommodityDto {
    pub amount: f64,
}

/// Stock level of one commodity at an outpost
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OutpostCommodityDto {
    pub id: i32,
    pub outpost_id: i32,
    pub commodity_id: i32,
    pub amount: f64,
}
