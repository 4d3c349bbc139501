use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        outpost::{CreateOutpostDto, OutpostCommodityDto, OutpostDto, UpdateOutpostCommodityDto},
    },
    server::{error::Error, model::app::AppState, service::outpost::OutpostService},
};

pub static OUTPOST_TAG: &str = "outpost";

impl From<entity::outpost::Model> for OutpostDto {
    fn from(outpost: entity::outpost::Model) -> Self {
        Self {
            id: outpost.id,
            name: outpost.name,
            star_system_id: outpost.star_system_id,
        }
    }
}

impl From<entity::outpost_commodity::Model> for OutpostCommodityDto {
    fn from(row: entity::outpost_commodity::Model) -> Self {
        Self {
            id: row.id,
            outpost_id: row.outpost_id,
            commodity_id: row.commodity_id,
            amount: row.amount,
        }
    }
}

/// Create an outpost
///
/// A stock row with an amount of 0 is generated for every commodity shortly after the
/// outpost is created.
#[utoipa::path(
    post,
    path = "/api/outposts",
    tag = OUTPOST_TAG,
    request_body = CreateOutpostDto,
    responses(
        (status = 201, description = "Outpost created", body = OutpostDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_outpost(
    State(state): State<AppState>,
    Json(payload): Json<CreateOutpostDto>,
) -> Result<impl IntoResponse, Error> {
    let outpost = OutpostService::new(&state.db, &state.event_queue)
        .create(&payload.name, payload.star_system_id)
        .await?;

    Ok((StatusCode::CREATED, Json(OutpostDto::from(outpost))))
}

/// Set the stock amount of an outpost commodity
///
/// A change row with the difference to the previous amount is recorded shortly after.
#[utoipa::path(
    patch,
    path = "/api/outpost-commodities/{id}",
    tag = OUTPOST_TAG,
    params(("id" = i32, Path, description = "Outpost commodity ID")),
    request_body = UpdateOutpostCommodityDto,
    responses(
        (status = 200, description = "Stock amount updated", body = OutpostCommodityDto),
        (status = 404, description = "Outpost commodity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_outpost_commodity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOutpostCommodityDto>,
) -> Result<impl IntoResponse, Error> {
    let row = OutpostService::new(&state.db, &state.event_queue)
        .update_commodity_amount(id, payload.amount)
        .await?
        .ok_or(Error::NotFound {
            resource: "Outpost commodity",
            id,
        })?;

    Ok(Json(OutpostCommodityDto::from(row)))
}

/// List the stock rows of an outpost
#[utoipa::path(
    get,
    path = "/api/outposts/{id}/commodities",
    tag = OUTPOST_TAG,
    params(("id" = i32, Path, description = "Outpost ID")),
    responses(
        (status = 200, description = "Stock rows by commodity", body = Vec<OutpostCommodityDto>),
        (status = 404, description = "Outpost not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outpost_commodities(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let rows = OutpostService::new(&state.db, &state.event_queue)
        .get_commodities(id)
        .await?
        .ok_or(Error::NotFound {
            resource: "Outpost",
            id,
        })?;

    let dtos: Vec<OutpostCommodityDto> = rows.into_iter().map(OutpostCommodityDto::from).collect();

    Ok(Json(dtos))
}
