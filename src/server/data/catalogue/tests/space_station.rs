//! Tests for SpaceStationRepository.

use super::*;

/// Tests creating a space station with every link set.
///
/// Verifies the integer flags are converted and the links are stored.
///
/// Expected: Ok with the station findable by name
#[tokio::test]
async fn creates_space_station_with_links() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalogue_tables().build().await?;
    let stanton = test
        .store()
        .insert_mock_star_system(68, "ST", "Stanton")
        .await?;
    let crusader = test
        .store()
        .insert_mock_planet(1, "CRU", "Crusader", Some(stanton.id))
        .await?;
    let yela = test
        .store()
        .insert_mock_moon(10, "YELA", "Yela", crusader.id)
        .await?;

    let links = SpaceStationLinks {
        star_system_id: stanton.id,
        planet_id: Some(crusader.id),
        moon_id: Some(yela.id),
    };
    let mut space_station = factory::mock_space_station(
        100,
        68,
        "Seraphim Station",
        "Stanton",
        Some("Crusader"),
        Some("Yela"),
    );
    space_station.is_lagrange = 1;

    let space_station_repo = SpaceStationRepository::new(&test.db);
    let created = space_station_repo.create(space_station, links).await?;

    assert_eq!(created.star_system_id, stanton.id);
    assert_eq!(created.planet_id, Some(crusader.id));
    assert_eq!(created.moon_id, Some(yela.id));
    assert!(created.has_trade_terminal);
    assert!(!created.has_refinery);
    assert!(created.is_lagrange);

    let found = space_station_repo.find_by_name("Seraphim Station").await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests updating a space station clears links that are no longer resolved.
///
/// Expected: Ok with `planet_id` and `moon_id` unset
#[tokio::test]
async fn updates_space_station_links() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalogue_tables().build().await?;
    let stanton = test
        .store()
        .insert_mock_star_system(68, "ST", "Stanton")
        .await?;
    let crusader = test
        .store()
        .insert_mock_planet(1, "CRU", "Crusader", Some(stanton.id))
        .await?;

    let space_station_repo = SpaceStationRepository::new(&test.db);
    let existing = space_station_repo
        .create(
            factory::mock_space_station(100, 68, "Port Olisar", "Stanton", Some("Crusader"), None),
            SpaceStationLinks {
                star_system_id: stanton.id,
                planet_id: Some(crusader.id),
                moon_id: None,
            },
        )
        .await?;

    let updated = space_station_repo
        .update(
            existing.clone(),
            factory::mock_space_station(100, 68, "Port Olisar", "Stanton", None, None),
            SpaceStationLinks {
                star_system_id: stanton.id,
                planet_id: None,
                moon_id: None,
            },
        )
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "Port Olisar");
    assert_eq!(updated.planet_id, None);
    assert_eq!(updated.orbit, None);

    Ok(())
}

/// Tests the required foreign key on `star_system_id`.
///
/// Expected: Err when the star system does not exist
#[tokio::test]
async fn fails_for_nonexistent_star_system() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalogue_tables().build().await?;

    let result = SpaceStationRepository::new(&test.db)
        .create(
            factory::mock_space_station(100, 68, "Port Olisar", "Stanton", None, None),
            SpaceStationLinks {
                star_system_id: 7,
                planet_id: None,
                moon_id: None,
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
