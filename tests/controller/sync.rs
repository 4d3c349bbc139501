use pulsepoint::{
    model::{api::ErrorDto, sync::SyncResponseDto},
    server::{
        controller::sync::{update_commodities, update_star_systems},
        service::sync::SyncKind,
    },
};

use super::*;

/// Expect 200 with only `success` for a clean commodity pass under the default policy
#[tokio::test]
async fn returns_success_for_commodity_sync() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .with_commodity_endpoint(vec![factory::mock_commodity("GOLD", "Gold")], 1)
        .build()
        .await?;

    let resp = update_commodities(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: SyncResponseDto = json_body(resp).await;
    assert!(body.success);
    assert!(body.report.is_none());

    test.assert_mocks();

    Ok(())
}

/// Expect 200 `success` even when UEX fails, under the default policy
#[tokio::test]
async fn hides_failure_by_default() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalogue_tables().build().await?;
    let commodities = test.uex().create_error_endpoint("/commodities", 503, 1);

    let resp = update_commodities(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: SyncResponseDto = json_body(resp).await;
    assert!(body.success);

    commodities.assert();

    Ok(())
}

/// Expect 200 with the record counts when failures are reported
#[tokio::test]
async fn returns_report_when_reporting() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .with_mock_commodity("GOLD", "Gold")
        .with_commodity_endpoint(
            vec![
                factory::mock_commodity("GOLD", "Gold"),
                factory::mock_commodity("AGRI", "Agricium"),
            ],
            1,
        )
        .build()
        .await?;

    let resp = update_commodities(State(test.into_reporting_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: SyncResponseDto = json_body(resp).await;
    let report = body.report.expect("report should be present");
    assert_eq!(report.kind, SyncKind::Commodities.to_string());
    assert_eq!((report.created, report.updated), (1, 1));
    assert!(report.failures.is_empty());

    Ok(())
}

/// Expect 502 when UEX fails and failures are reported
#[tokio::test]
async fn returns_bad_gateway_when_reporting() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalogue_tables().build().await?;
    let commodities = test.uex().create_error_endpoint("/commodities", 503, 1);

    let resp = update_commodities(State(test.into_reporting_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    commodities.assert();

    Ok(())
}

/// Expect 500 when a star system step rolls back and failures are reported
#[tokio::test]
async fn returns_error_for_incomplete_star_system_sync() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalogue_tables()
        .with_star_system_endpoint(vec![factory::mock_star_system(68, "ST", "Stanton")], 1)
        .with_moon_endpoint(68, vec![], 1)
        .with_space_station_endpoint(68, vec![], 1)
        .build()
        .await?;
    let planets = test.uex().create_error_endpoint("/planets", 500, 1);

    let resp = update_star_systems(State(test.into_reporting_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("1 failed step"));

    planets.assert();
    test.assert_mocks();

    Ok(())
}

/// Expect 409 for a trigger arriving while a pass of the same kind runs, under either policy
#[tokio::test]
async fn returns_conflict_while_running() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalogue_tables().build().await?;
    let state = test.into_app_state();
    let _guard = state.sync_locks.try_acquire(SyncKind::StarSystems).unwrap();

    let resp = update_star_systems(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
