use pulsepoint_test_utils::prelude::*;

use super::*;
use crate::server::data::outpost::{
    commodity_change::CommodityChangeRepository, outpost_commodity::OutpostCommodityRepository,
};

/// Tests that the worker handles every queued event before stopping.
///
/// Expected: stock rows for the outpost and one change row, worker exits once the queue closes
#[tokio::test]
async fn handles_events_in_order_until_queue_closes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_outpost_tables()
        .with_mock_commodity("GOLD", "Gold")
        .with_mock_commodity("AGRI", "Agricium")
        .build()
        .await?;
    let outpost = test.store().insert_mock_outpost("Shubin SMO-10").await?;
    let (events, receiver) = EventQueue::new();
    let worker = EventWorker::new(receiver, RecordEventHandler::new(test.db.clone()));

    events
        .publish(RecordEvent::OutpostCreated {
            outpost_id: outpost.id,
        })
        .unwrap();
    events
        .publish(RecordEvent::OutpostCommodityUpdated {
            outpost_commodity_id: 1,
            commodity_id: 1,
            previous_amount: 5.0,
            amount: 8.0,
        })
        .unwrap();
    drop(events);

    worker.run().await;

    let rows = OutpostCommodityRepository::new(&test.db)
        .get_by_outpost_id(outpost.id)
        .await?;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.amount == 0.0));

    let changes = CommodityChangeRepository::new(&test.db)
        .get_by_outpost_commodity_id(rows[0].id)
        .await?;
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].change_amount, 3.0);

    Ok(())
}

/// Tests that a failing event doesn't stop the worker.
///
/// Expected: the event for the missing outpost fails, the following one is still handled
#[tokio::test]
async fn continues_after_failed_event() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_outpost_tables()
        .with_mock_commodity("GOLD", "Gold")
        .build()
        .await?;
    let outpost = test.store().insert_mock_outpost("Shubin SMO-10").await?;
    let (events, receiver) = EventQueue::new();

    events
        .publish(RecordEvent::OutpostCreated { outpost_id: 999 })
        .unwrap();
    events
        .publish(RecordEvent::OutpostCreated {
            outpost_id: outpost.id,
        })
        .unwrap();
    drop(events);

    EventWorker::new(receiver, RecordEventHandler::new(test.db.clone()))
        .run()
        .await;

    let rows = OutpostCommodityRepository::new(&test.db)
        .get_by_outpost_id(outpost.id)
        .await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests publishing once the worker has stopped.
///
/// Expected: Err(InternalError)
#[tokio::test]
async fn publish_fails_when_worker_stopped() {
    let (events, receiver) = EventQueue::new();
    drop(receiver);

    let result = events.publish(RecordEvent::OutpostCreated { outpost_id: 1 });

    assert!(matches!(result, Err(Error::InternalError(_))));
}
