//! Tests for SyncLocks and SyncService::run.

use super::*;

/// Expect a second acquisition of the same kind to fail until the first guard drops
#[tokio::test]
async fn refuses_concurrent_pass_of_same_kind() {
    let locks = SyncLocks::new();

    let guard = locks.try_acquire(SyncKind::Commodities).unwrap();
    assert_eq!(
        locks.try_acquire(SyncKind::Commodities).unwrap_err(),
        SyncError::AlreadyRunning(SyncKind::Commodities)
    );

    drop(guard);
    assert!(locks.try_acquire(SyncKind::Commodities).is_ok());
}

/// Expect locks of different kinds to be independent and shared between clones
#[tokio::test]
async fn locks_are_per_kind_and_shared() {
    let locks = SyncLocks::new();
    let clone = locks.clone();

    let _commodities = locks.try_acquire(SyncKind::Commodities).unwrap();

    assert!(clone.try_acquire(SyncKind::StarSystems).is_ok());
    assert!(clone.try_acquire(SyncKind::Commodities).is_err());
}

/// Tests that SyncService::run refuses to start while a pass of the same kind holds the lock.
///
/// Expected: Err(SyncError::AlreadyRunning) without any request to UEX
#[tokio::test]
async fn run_fails_fast_when_already_running() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .with_commodity_endpoint(vec![factory::mock_commodity("GOLD", "Gold")], 0)
        .build()
        .await?;
    let locks = SyncLocks::new();
    let _guard = locks.try_acquire(SyncKind::Commodities).unwrap();

    let result = SyncService::new(&test.db, &test.uex_client, &locks)
        .run(SyncKind::Commodities)
        .await;

    assert!(matches!(
        result,
        Err(Error::SyncError(SyncError::AlreadyRunning(
            SyncKind::Commodities
        )))
    ));
    test.assert_mocks();

    Ok(())
}

/// Tests that SyncService::run releases the lock once the pass is over.
///
/// Expected: Ok for two consecutive passes
#[tokio::test]
async fn run_releases_lock_after_pass() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .with_commodity_endpoint(vec![factory::mock_commodity("GOLD", "Gold")], 2)
        .build()
        .await?;
    let locks = SyncLocks::new();
    let sync_service = SyncService::new(&test.db, &test.uex_client, &locks);

    assert!(sync_service.run(SyncKind::Commodities).await.is_ok());
    assert!(sync_service.run(SyncKind::Commodities).await.is_ok());
    test.assert_mocks();

    Ok(())
}
