use std::time::Duration;

use axum::{extract::Path, Json};
use pulsepoint::{
    model::outpost::{
        CreateOutpostDto, OutpostCommodityDto, OutpostDto, UpdateOutpostCommodityDto,
    },
    server::{
        controller::outpost::{create_outpost, get_outpost_commodities, update_outpost_commodity},
        data::outpost::commodity_change::CommodityChangeRepository,
        model::app::AppState,
    },
};

use super::*;

/// Polls the stock rows of an outpost until the event worker has generated `expected` rows.
async fn wait_for_stock_rows(
    state: &AppState,
    outpost_id: i32,
    expected: usize,
) -> Vec<OutpostCommodityDto> {
    for _ in 0..50 {
        let resp = get_outpost_commodities(State(state.clone()), Path(outpost_id))
            .await
            .into_response();
        let rows: Vec<OutpostCommodityDto> = json_body(resp).await;

        if rows.len() == expected {
            return rows;
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    panic!("Expected {} stock rows for outpost {}", expected, outpost_id);
}

/// Expect 201 and one stock row at 0 per commodity once the event is handled
#[tokio::test]
async fn creates_outpost_with_stock_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_outpost_tables()
        .with_mock_commodity("GOLD", "Gold")
        .with_mock_commodity("AGRI", "Agricium")
        .build()
        .await?;
    let state = test.into_app_state();

    let resp = create_outpost(
        State(state.clone()),
        Json(CreateOutpostDto {
            name: "Shubin SMO-10".to_string(),
            star_system_id: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let outpost: OutpostDto = json_body(resp).await;
    assert_eq!(outpost.name, "Shubin SMO-10");

    let rows = wait_for_stock_rows(&state, outpost.id, 2).await;
    assert!(rows.iter().all(|row| row.amount == 0.0));

    Ok(())
}

/// Expect 200 with the new amount and a change row of +3 for an update from 5 to 8
#[tokio::test]
async fn updates_stock_amount_and_records_change() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_outpost_tables()
        .with_mock_commodity("GOLD", "Gold")
        .build()
        .await?;
    let outpost = test.store().insert_mock_outpost("Shubin SMO-10").await?;
    let row = test
        .store()
        .insert_mock_outpost_commodity(outpost.id, 1, 5.0)
        .await?;
    let state = test.into_app_state();

    let resp = update_outpost_commodity(
        State(state.clone()),
        Path(row.id),
        Json(UpdateOutpostCommodityDto { amount: 8.0 }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: OutpostCommodityDto = json_body(resp).await;
    assert_eq!(updated.amount, 8.0);

    let repo = CommodityChangeRepository::new(&test.db);
    let mut changes = Vec::new();
    for _ in 0..50 {
        changes = repo.get_by_outpost_commodity_id(row.id).await?;
        if !changes.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].change_amount, 3.0);

    Ok(())
}

/// Expect 404 when updating a stock row that doesn't exist
#[tokio::test]
async fn returns_not_found_for_missing_stock_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outpost_tables().build().await?;

    let resp = update_outpost_commodity(
        State(test.into_app_state()),
        Path(42),
        Json(UpdateOutpostCommodityDto { amount: 1.0 }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 when listing the stock of an outpost that doesn't exist
#[tokio::test]
async fn returns_not_found_for_missing_outpost() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outpost_tables().build().await?;

    let resp = get_outpost_commodities(State(test.into_app_state()), Path(42))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when required database tables don't exist
#[tokio::test]
async fn returns_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = create_outpost(
        State(test.into_app_state()),
        Json(CreateOutpostDto {
            name: "Shubin SMO-10".to_string(),
            star_system_id: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
