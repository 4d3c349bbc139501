use sea_orm::EntityTrait;

use super::*;

/// Tests that creating an outpost publishes an event once committed.
///
/// Expected: Ok with the outpost stored and OutpostCreated queued
#[tokio::test]
async fn create_publishes_outpost_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outpost_tables().build().await?;
    let (events, mut receiver) = EventQueue::new();

    let outpost = OutpostService::new(&test.db, &events)
        .create("Shubin SMO-10", None)
        .await
        .unwrap();

    assert_eq!(outpost.name, "Shubin SMO-10");
    assert_eq!(
        receiver.try_recv().ok(),
        Some(RecordEvent::OutpostCreated {
            outpost_id: outpost.id
        })
    );

    Ok(())
}

/// Tests that a failed insert publishes nothing.
///
/// Expected: Err with no event queued
#[tokio::test]
async fn create_does_not_publish_on_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let (events, mut receiver) = EventQueue::new();

    let result = OutpostService::new(&test.db, &events)
        .create("Shubin SMO-10", None)
        .await;

    assert!(result.is_err());
    assert!(receiver.try_recv().is_err());

    Ok(())
}

/// Tests that updating a stock amount publishes the amount before and after the update.
///
/// Expected: Ok(Some) with the new amount and OutpostCommodityUpdated from 5 to 8
#[tokio::test]
async fn update_publishes_previous_and_new_amount() -> Result<(), TestError> {
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
    let (events, mut receiver) = EventQueue::new();

    let updated = OutpostService::new(&test.db, &events)
        .update_commodity_amount(row.id, 8.0)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.amount, 8.0);
    assert_eq!(
        receiver.try_recv().ok(),
        Some(RecordEvent::OutpostCommodityUpdated {
            outpost_commodity_id: row.id,
            commodity_id: row.commodity_id,
            previous_amount: 5.0,
            amount: 8.0,
        })
    );

    Ok(())
}

/// Tests updating a stock row that doesn't exist.
///
/// Expected: Ok(None) with no event queued
#[tokio::test]
async fn update_returns_none_for_missing_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outpost_tables().build().await?;
    let (events, mut receiver) = EventQueue::new();

    let result = OutpostService::new(&test.db, &events)
        .update_commodity_amount(7, 8.0)
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(receiver.try_recv().is_err());

    Ok(())
}

/// Tests creating an outpost after the worker is gone.
///
/// Expected: Ok with the committed outpost, the lost event is only logged
#[tokio::test]
async fn create_returns_outpost_when_queue_closed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outpost_tables().build().await?;
    let (events, receiver) = EventQueue::new();
    drop(receiver);

    let outpost = OutpostService::new(&test.db, &events)
        .create("Shubin SMO-10", None)
        .await
        .unwrap();

    let stored = entity::prelude::Outpost::find_by_id(outpost.id)
        .one(&test.db)
        .await?;
    assert_eq!(stored, Some(outpost));

    Ok(())
}

/// Tests updating a stock amount after the worker is gone.
///
/// Expected: Ok(Some) with the new amount persisted
#[tokio::test]
async fn update_returns_row_when_queue_closed() -> Result<(), TestError> {
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
    let (events, receiver) = EventQueue::new();
    drop(receiver);

    let updated = OutpostService::new(&test.db, &events)
        .update_commodity_amount(row.id, 8.0)
        .await
        .unwrap()
        .expect("row should exist");

    let stored = OutpostCommodityRepository::new(&test.db)
        .find_by_id(row.id)
        .await?;
    assert_eq!(updated.amount, 8.0);
    assert_eq!(stored, Some(updated));

    Ok(())
}

/// Tests listing stock rows of an outpost.
///
/// Expected: Ok(Some) for an existing outpost, Ok(None) for a missing one
#[tokio::test]
async fn get_commodities_distinguishes_missing_outpost() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_outpost_tables()
        .with_mock_commodity("GOLD", "Gold")
        .build()
        .await?;
    let outpost = test.store().insert_mock_outpost("Shubin SMO-10").await?;
    test.store()
        .insert_mock_outpost_commodity(outpost.id, 1, 5.0)
        .await?;
    let (events, _receiver) = EventQueue::new();
    let service = OutpostService::new(&test.db, &events);

    let rows = service.get_commodities(outpost.id).await.unwrap();
    let missing = service.get_commodities(outpost.id + 1).await.unwrap();

    assert_eq!(rows.map(|rows| rows.len()), Some(1));
    assert!(missing.is_none());

    Ok(())
}

/// Tests that each recorded change is kept rather than overwritten.
///
/// Expected: two change rows in order for two updates
#[tokio::test]
async fn changes_accumulate_per_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_outpost_tables()
        .with_mock_commodity("GOLD", "Gold")
        .build()
        .await?;
    let outpost = test.store().insert_mock_outpost("Shubin SMO-10").await?;
    let row = test
        .store()
        .insert_mock_outpost_commodity(outpost.id, 1, 0.0)
        .await?;

    let derived = DerivedRecordService::new(&test.db);
    derived
        .record_commodity_change(row.id, row.commodity_id, 0.0, 4.0)
        .await
        .unwrap();
    derived
        .record_commodity_change(row.id, row.commodity_id, 4.0, 1.0)
        .await
        .unwrap();

    let changes = CommodityChangeRepository::new(&test.db)
        .get_by_outpost_commodity_id(row.id)
        .await?;
    let amounts: Vec<f64> = changes.iter().map(|c| c.change_amount).collect();

    assert_eq!(amounts, vec![4.0, -3.0]);

    Ok(())
}

/// Tests that sequential stock updates each see the amount left by the previous one.
///
/// Expected: change amounts of 4 and -3 summing to the net change of 1
#[tokio::test]
async fn sequential_updates_record_net_change() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_outpost_tables()
        .with_mock_commodity("GOLD", "Gold")
        .build()
        .await?;
    let outpost = test.store().insert_mock_outpost("Shubin SMO-10").await?;
    let row = test
        .store()
        .insert_mock_outpost_commodity(outpost.id, 1, 0.0)
        .await?;
    let (events, mut receiver) = EventQueue::new();
    let service = OutpostService::new(&test.db, &events);

    service
        .update_commodity_amount(row.id, 4.0)
        .await
        .unwrap()
        .expect("row should exist");
    service
        .update_commodity_amount(row.id, 1.0)
        .await
        .unwrap()
        .expect("row should exist");

    let handler = RecordEventHandler::new(test.db.clone());
    while let Ok(event) = receiver.try_recv() {
        handler.handle(&event).await.unwrap();
    }

    let changes = CommodityChangeRepository::new(&test.db)
        .get_by_outpost_commodity_id(row.id)
        .await?;
    let amounts: Vec<f64> = changes.iter().map(|c| c.change_amount).collect();

    assert_eq!(amounts, vec![4.0, -3.0]);
    assert_eq!(amounts.iter().sum::<f64>(), 1.0);

    Ok(())
}
