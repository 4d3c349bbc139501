//! Tests for StarSystemSyncService::sync.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use super::*;

const STANTON_ID: i64 = 68;

/// Builder with Stanton served by the star system endpoint and empty child endpoints.
fn stanton_builder() -> TestBuilder {
    TestBuilder::new()
        .with_catalogue_tables()
        .with_star_system_endpoint(
            vec![factory::mock_star_system(STANTON_ID, "ST", "Stanton")],
            1,
        )
}

/// Tests that only available and visible star systems are stored and scanned.
///
/// Expected: Ok with only Stanton stored and child endpoints requested for Stanton only
#[tokio::test]
async fn stores_only_available_and_visible_star_systems() -> Result<(), TestError> {
    let mut hidden = factory::mock_star_system(1, "HID", "Hidden");
    hidden.is_visible = 0;
    let mut unavailable = factory::mock_star_system(2, "UNA", "Unavailable");
    unavailable.is_available = 0;

    let test = TestBuilder::new()
        .with_catalogue_tables()
        .with_star_system_endpoint(
            vec![
                factory::mock_star_system(STANTON_ID, "ST", "Stanton"),
                hidden,
                unavailable,
            ],
            1,
        )
        .with_planet_endpoint(STANTON_ID, vec![], 1)
        .with_moon_endpoint(STANTON_ID, vec![], 1)
        .with_space_station_endpoint(STANTON_ID, vec![], 1)
        .build()
        .await?;

    let report = StarSystemSyncService::new(&test.db, &test.uex_client)
        .sync()
        .await
        .unwrap();

    assert_eq!(report.kind, SyncKind::StarSystems);
    assert_eq!(report.created, 1);
    assert_eq!(report.skipped, 2);
    assert!(report.is_clean());

    let stored = entity::prelude::StarSystem::find().all(&test.db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].code, "ST");
    assert_eq!(stored[0].uex_id, STANTON_ID);

    test.assert_mocks();

    Ok(())
}

/// Tests that a planet fetched for Stanton resolves back to Stanton.
///
/// Expected: Ok with Crusader stored and linked to the Stanton record
#[tokio::test]
async fn links_planets_to_their_star_system() -> Result<(), TestError> {
    let test = stanton_builder()
        .with_planet_endpoint(
            STANTON_ID,
            vec![factory::mock_planet(1, STANTON_ID, "CRU", "Crusader")],
            1,
        )
        .with_moon_endpoint(STANTON_ID, vec![], 1)
        .with_space_station_endpoint(STANTON_ID, vec![], 1)
        .build()
        .await?;

    StarSystemSyncService::new(&test.db, &test.uex_client)
        .sync()
        .await
        .unwrap();

    let (crusader, star_system) = entity::prelude::Planet::find()
        .filter(entity::planet::Column::Code.eq("CRU"))
        .find_also_related(entity::prelude::StarSystem)
        .one(&test.db)
        .await?
        .expect("Crusader should be stored");

    assert_eq!(crusader.name, "Crusader");
    assert_eq!(star_system.map(|s| s.name), Some("Stanton".to_string()));

    test.assert_mocks();

    Ok(())
}

/// Tests that a moon whose parent planet isn't stored is skipped without failing the batch.
///
/// Expected: Ok with no moon row, Yela counted as skipped and no failures recorded
#[tokio::test]
async fn skips_moon_without_parent_planet() -> Result<(), TestError> {
    let test = stanton_builder()
        .with_planet_endpoint(STANTON_ID, vec![], 1)
        .with_moon_endpoint(
            STANTON_ID,
            vec![
                factory::mock_moon(10, STANTON_ID, "YELA", "Yela", "Crusader"),
            ],
            1,
        )
        .with_space_station_endpoint(STANTON_ID, vec![], 1)
        .build()
        .await?;

    let report = StarSystemSyncService::new(&test.db, &test.uex_client)
        .sync()
        .await
        .unwrap();

    assert!(report.is_clean(), "Failures: {:?}", report.failures);
    assert_eq!(report.skipped, 1);
    assert!(entity::prelude::Moon::find().all(&test.db).await?.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Tests that moons are linked to the planet reconciled earlier in the same pass.
///
/// Expected: Ok with Yela stored under Crusader
#[tokio::test]
async fn links_moons_to_parent_planet() -> Result<(), TestError> {
    let test = stanton_builder()
        .with_planet_endpoint(
            STANTON_ID,
            vec![factory::mock_planet(1, STANTON_ID, "CRU", "Crusader")],
            1,
        )
        .with_moon_endpoint(
            STANTON_ID,
            vec![
                factory::mock_moon(10, STANTON_ID, "YELA", "Yela", "Crusader"),
            ],
            1,
        )
        .with_space_station_endpoint(STANTON_ID, vec![], 1)
        .build()
        .await?;

    StarSystemSyncService::new(&test.db, &test.uex_client)
        .sync()
        .await
        .unwrap();

    let (yela, crusader) = entity::prelude::Moon::find()
        .find_also_related(entity::prelude::Planet)
        .one(&test.db)
        .await?
        .expect("Yela should be stored");

    assert_eq!(yela.code, "YELA");
    assert_eq!(crusader.map(|p| p.code), Some("CRU".to_string()));

    Ok(())
}

/// Tests that a space station naming an unknown star system aborts that system's batch.
///
/// Expected: Ok with no station committed and one failure recorded for Stanton
#[tokio::test]
async fn aborts_space_stations_when_star_system_missing() -> Result<(), TestError> {
    let test = stanton_builder()
        .with_planet_endpoint(STANTON_ID, vec![], 1)
        .with_moon_endpoint(STANTON_ID, vec![], 1)
        .with_space_station_endpoint(
            STANTON_ID,
            vec![
                factory::mock_space_station(100, STANTON_ID, "Port Olisar", "Stanton", None, None),
                factory::mock_space_station(101, STANTON_ID, "Ruin Station", "Pyro", None, None),
            ],
            1,
        )
        .build()
        .await?;

    let report = StarSystemSyncService::new(&test.db, &test.uex_client)
        .sync()
        .await
        .unwrap();

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].contains("space stations"));
    assert!(entity::prelude::SpaceStation::find()
        .all(&test.db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that unknown optional parents leave the station links unset.
///
/// Expected: Ok with the station stored, linked to Stanton and Crusader but not to a moon
#[tokio::test]
async fn leaves_unknown_optional_parents_unset() -> Result<(), TestError> {
    let test = stanton_builder()
        .with_planet_endpoint(
            STANTON_ID,
            vec![factory::mock_planet(1, STANTON_ID, "CRU", "Crusader")],
            1,
        )
        .with_moon_endpoint(STANTON_ID, vec![], 1)
        .with_space_station_endpoint(
            STANTON_ID,
            vec![factory::mock_space_station(
                100,
                STANTON_ID,
                "Seraphim Station",
                "Stanton",
                Some("Crusader"),
                Some("Cellin"),
            )],
            1,
        )
        .build()
        .await?;

    let report = StarSystemSyncService::new(&test.db, &test.uex_client)
        .sync()
        .await
        .unwrap();

    assert!(report.is_clean(), "Failures: {:?}", report.failures);

    let stations = entity::prelude::SpaceStation::find().all(&test.db).await?;
    let stanton = entity::prelude::StarSystem::find().one(&test.db).await?.unwrap();
    let crusader = entity::prelude::Planet::find().one(&test.db).await?.unwrap();

    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].star_system_id, stanton.id);
    assert_eq!(stations[0].planet_id, Some(crusader.id));
    assert_eq!(stations[0].moon_id, None);

    Ok(())
}

/// Tests that a failed per-system step doesn't stop the remaining steps.
///
/// Expected: Ok with one failure for planets while moons and stations are still requested
#[tokio::test]
async fn continues_after_failed_step() -> Result<(), TestError> {
    let mut test = stanton_builder()
        .with_moon_endpoint(STANTON_ID, vec![], 1)
        .with_space_station_endpoint(
            STANTON_ID,
            vec![factory::mock_space_station(
                100,
                STANTON_ID,
                "Port Olisar",
                "Stanton",
                None,
                None,
            )],
            1,
        )
        .build()
        .await?;
    let planets = test.uex().create_error_endpoint("/planets", 500, 1);

    let report = StarSystemSyncService::new(&test.db, &test.uex_client)
        .sync()
        .await
        .unwrap();

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].contains("planets"));
    assert_eq!(
        entity::prelude::SpaceStation::find()
            .all(&test.db)
            .await?
            .len(),
        1
    );

    planets.assert();
    test.assert_mocks();

    Ok(())
}

/// Tests that failing to fetch star systems fails the whole pass.
///
/// Expected: Err(UexError) without any child request
#[tokio::test]
async fn fails_when_star_systems_unavailable() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalogue_tables().build().await?;
    let star_systems = test.uex().create_error_endpoint("/star_systems", 502, 1);

    let result = StarSystemSyncService::new(&test.db, &test.uex_client)
        .sync()
        .await;

    assert!(matches!(result, Err(Error::UexError(_))));
    assert!(entity::prelude::StarSystem::find()
        .all(&test.db)
        .await?
        .is_empty());
    star_systems.assert();

    Ok(())
}

/// Tests that a second pass updates in place.
///
/// Expected: Ok with star system and planet updated, no duplicates
#[tokio::test]
async fn second_pass_updates_existing_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .with_star_system_endpoint(
            vec![factory::mock_star_system(STANTON_ID, "ST", "Stanton")],
            2,
        )
        .with_planet_endpoint(
            STANTON_ID,
            vec![factory::mock_planet(1, STANTON_ID, "CRU", "Crusader")],
            2,
        )
        .with_moon_endpoint(STANTON_ID, vec![], 2)
        .with_space_station_endpoint(STANTON_ID, vec![], 2)
        .build()
        .await?;

    let sync_service = StarSystemSyncService::new(&test.db, &test.uex_client);
    let first = sync_service.sync().await.unwrap();
    let second = sync_service.sync().await.unwrap();

    assert_eq!((first.created, first.updated), (2, 0));
    assert_eq!((second.created, second.updated), (0, 2));
    assert_eq!(entity::prelude::StarSystem::find().all(&test.db).await?.len(), 1);
    assert_eq!(entity::prelude::Planet::find().all(&test.db).await?.len(), 1);

    test.assert_mocks();

    Ok(())
}
