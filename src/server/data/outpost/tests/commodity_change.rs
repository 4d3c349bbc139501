use super::*;

/// Tests appending change rows for a stock row.
///
/// Expected: Ok with both rows returned in insertion order, signs preserved
#[tokio::test]
async fn appends_change_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_outpost_tables()
        .with_mock_commodity("GOLD", "Gold")
        .build()
        .await?;
    let outpost = test.store().insert_mock_outpost("First").await?;
    let row = test
        .store()
        .insert_mock_outpost_commodity(outpost.id, 1, 5.0)
        .await?;

    let repo = CommodityChangeRepository::new(&test.db);
    repo.create(row.id, row.commodity_id, 3.0).await?;
    repo.create(row.id, row.commodity_id, -8.0).await?;

    let changes = repo.get_by_outpost_commodity_id(row.id).await?;

    let amounts: Vec<f64> = changes.iter().map(|c| c.change_amount).collect();
    assert_eq!(amounts, vec![3.0, -8.0]);
    assert!(changes.iter().all(|c| c.commodity_id == row.commodity_id));

    Ok(())
}

/// Expect Err when the stock row does not exist
#[tokio::test]
async fn fails_for_nonexistent_outpost_commodity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_outpost_tables()
        .with_mock_commodity("GOLD", "Gold")
        .build()
        .await?;

    let result = CommodityChangeRepository::new(&test.db)
        .create(1, 1, 3.0)
        .await;

    assert!(result.is_err());

    Ok(())
}
