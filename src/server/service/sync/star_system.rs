use sea_orm::{DatabaseConnection, TransactionTrait};
use uex::model::universe::{Moon, Planet, SpaceStation, StarSystem};

use crate::server::{
    data::catalogue::{
        moon::MoonRepository,
        planet::PlanetRepository,
        space_station::{SpaceStationLinks, SpaceStationRepository},
        star_system::StarSystemRepository,
    },
    error::{sync::SyncError, Error},
    service::{
        filter::filter_star_systems,
        retry::RetryContext,
        sync::{log_save_error, ReconcileCounts, SyncKind, SyncReport},
    },
};

/// Synchronises star systems and, for each kept system, its planets, moons and space stations.
pub struct StarSystemSyncService<'a> {
    db: &'a DatabaseConnection,
    uex_client: &'a uex::Client,
    max_attempts: u32,
}

impl<'a> StarSystemSyncService<'a> {
    /// Creates a new instance of [`StarSystemSyncService`]
    pub fn new(db: &'a DatabaseConnection, uex_client: &'a uex::Client) -> Self {
        Self {
            db,
            uex_client,
            max_attempts: 1,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Runs a full star system pass
    ///
    /// Star systems are reconciled and committed first. Then, per star system and in order,
    /// planets, moons and space stations are each fetched with `id_star_system` and
    /// reconciled in their own transaction. A failed per-system step is rolled back, logged
    /// and recorded in the report while the pass continues.
    ///
    /// # Returns
    /// - `Ok(SyncReport)` - Star systems committed, per-system failures listed in the report
    /// - `Err(Error)` - Fetching or reconciling the star systems themselves failed
    pub async fn sync(&self) -> Result<SyncReport, Error> {
        let mut report = SyncReport::new(SyncKind::StarSystems);

        let (star_systems, counts) = self.sync_star_systems().await?;
        report.record(counts);

        for star_system in &star_systems {
            let result = self.sync_planets(star_system).await;
            report.record_step(&star_system.code, "planets", result);

            let result = self.sync_moons(star_system).await;
            report.record_step(&star_system.code, "moons", result);

            let result = self.sync_space_stations(star_system).await;
            report.record_step(&star_system.code, "space stations", result);
        }

        Ok(report)
    }

    /// Fetches, filters and upserts star systems by code
    ///
    /// # Returns
    /// The persisted star systems in fetch order, with the record counts of the transaction
    pub async fn sync_star_systems(
        &self,
    ) -> Result<(Vec<entity::star_system::Model>, ReconcileCounts), Error> {
        let mut ctx: RetryContext<Option<Vec<StarSystem>>> =
            RetryContext::with_max_attempts(self.max_attempts);

        ctx.execute_with_retry("star system sync", |retry_cache| {
            let db = self.db.clone();
            let uex_client = self.uex_client.clone();

            Box::pin(async move {
                let fetched = match retry_cache.as_ref() {
                    Some(cached) => cached.clone(),
                    None => {
                        let fetched = uex_client.universe().get_star_systems().await?;
                        *retry_cache = Some(fetched.clone());
                        fetched
                    }
                };

                let fetched_count = fetched.len();
                let star_systems = filter_star_systems(fetched);

                let mut counts = ReconcileCounts {
                    skipped: fetched_count - star_systems.len(),
                    ..Default::default()
                };

                let txn = db.begin().await?;
                let star_system_repo = StarSystemRepository::new(&txn);
                let mut models = Vec::with_capacity(star_systems.len());

                for star_system in star_systems {
                    let code = star_system.code.clone();

                    let model = match star_system_repo.find_by_code(&code).await? {
                        Some(existing) => {
                            let model = star_system_repo
                                .update(existing, star_system)
                                .await
                                .map_err(|e| log_save_error("star system", &code, e))?;
                            counts.updated += 1;
                            model
                        }
                        None => {
                            let model = star_system_repo
                                .create(star_system)
                                .await
                                .map_err(|e| log_save_error("star system", &code, e))?;
                            counts.created += 1;
                            model
                        }
                    };

                    models.push(model);
                }

                txn.commit().await?;

                Ok((models, counts))
            })
        })
        .await
    }

    /// Fetches and upserts the planets of a star system by code, linking them to the system
    pub async fn sync_planets(
        &self,
        star_system: &entity::star_system::Model,
    ) -> Result<ReconcileCounts, Error> {
        let mut ctx: RetryContext<Option<Vec<Planet>>> =
            RetryContext::with_max_attempts(self.max_attempts);
        let description = format!("planet sync for star system {}", star_system.code);
        let star_system_uex_id = star_system.uex_id;
        let star_system_id = star_system.id;

        ctx.execute_with_retry(&description, |retry_cache| {
            let db = self.db.clone();
            let uex_client = self.uex_client.clone();

            Box::pin(async move {
                let planets = match retry_cache.as_ref() {
                    Some(cached) => cached.clone(),
                    None => {
                        let fetched = uex_client
                            .universe()
                            .get_planets(star_system_uex_id)
                            .await?;
                        *retry_cache = Some(fetched.clone());
                        fetched
                    }
                };

                let txn = db.begin().await?;
                let planet_repo = PlanetRepository::new(&txn);
                let mut counts = ReconcileCounts::default();

                for planet in planets {
                    let code = planet.code.clone();

                    match planet_repo.find_by_code(&code).await? {
                        Some(existing) => {
                            planet_repo
                                .update(existing, planet, Some(star_system_id))
                                .await
                                .map_err(|e| log_save_error("planet", &code, e))?;
                            counts.updated += 1;
                        }
                        None => {
                            planet_repo
                                .create(planet, Some(star_system_id))
                                .await
                                .map_err(|e| log_save_error("planet", &code, e))?;
                            counts.created += 1;
                        }
                    }
                }

                txn.commit().await?;

                Ok(counts)
            })
        })
        .await
    }

    /// Fetches and upserts the moons of a star system by code
    ///
    /// Moons whose parent planet can't be found by name are skipped without failing the batch.
    pub async fn sync_moons(
        &self,
        star_system: &entity::star_system::Model,
    ) -> Result<ReconcileCounts, Error> {
        let mut ctx: RetryContext<Option<Vec<Moon>>> =
            RetryContext::with_max_attempts(self.max_attempts);
        let description = format!("moon sync for star system {}", star_system.code);
        let star_system_uex_id = star_system.uex_id;
        let star_system_id = star_system.id;

        ctx.execute_with_retry(&description, |retry_cache| {
            let db = self.db.clone();
            let uex_client = self.uex_client.clone();

            Box::pin(async move {
                let moons = match retry_cache.as_ref() {
                    Some(cached) => cached.clone(),
                    None => {
                        let fetched = uex_client
                            .universe()
                            .get_moons(star_system_uex_id)
                            .await?;
                        *retry_cache = Some(fetched.clone());
                        fetched
                    }
                };

                let txn = db.begin().await?;
                let planet_repo = PlanetRepository::new(&txn);
                let moon_repo = MoonRepository::new(&txn);
                let mut counts = ReconcileCounts::default();

                for moon in moons {
                    let code = moon.code.clone();

                    let planet = match moon.planet_name.as_deref() {
                        Some(planet_name) => planet_repo.find_by_name(planet_name).await?,
                        None => None,
                    };

                    let Some(planet) = planet else {
                        tracing::warn!(
                            code = %code,
                            planet = ?moon.planet_name,
                            "Skipping moon {}, parent planet not found",
                            moon.name
                        );
                        counts.skipped += 1;
                        continue;
                    };

                    match moon_repo.find_by_code(&code).await? {
                        Some(existing) => {
                            moon_repo
                                .update(existing, moon, planet.id, Some(star_system_id))
                                .await
                                .map_err(|e| log_save_error("moon", &code, e))?;
                            counts.updated += 1;
                        }
                        None => {
                            moon_repo
                                .create(moon, planet.id, Some(star_system_id))
                                .await
                                .map_err(|e| log_save_error("moon", &code, e))?;
                            counts.created += 1;
                        }
                    }
                }

                txn.commit().await?;

                Ok(counts)
            })
        })
        .await
    }

    /// Fetches and upserts the space stations of a star system by name
    ///
    /// The owning star system is required: a station naming a system that isn't stored aborts
    /// the whole transaction. Planet and moon links are optional and left unset when the
    /// name is absent or unknown.
    pub async fn sync_space_stations(
        &self,
        star_system: &entity::star_system::Model,
    ) -> Result<ReconcileCounts, Error> {
        let mut ctx: RetryContext<Option<Vec<SpaceStation>>> =
            RetryContext::with_max_attempts(self.max_attempts);
        let description = format!("space station sync for star system {}", star_system.code);
        let star_system_uex_id = star_system.uex_id;

        ctx.execute_with_retry(&description, |retry_cache| {
            let db = self.db.clone();
            let uex_client = self.uex_client.clone();

            Box::pin(async move {
                let space_stations = match retry_cache.as_ref() {
                    Some(cached) => cached.clone(),
                    None => {
                        let fetched = uex_client
                            .universe()
                            .get_space_stations(star_system_uex_id)
                            .await?;
                        *retry_cache = Some(fetched.clone());
                        fetched
                    }
                };

                let txn = db.begin().await?;
                let star_system_repo = StarSystemRepository::new(&txn);
                let planet_repo = PlanetRepository::new(&txn);
                let moon_repo = MoonRepository::new(&txn);
                let space_station_repo = SpaceStationRepository::new(&txn);
                let mut counts = ReconcileCounts::default();

                for space_station in space_stations {
                    let name = space_station.name.clone();
                    let star_system_name =
                        space_station.star_system_name.clone().unwrap_or_default();

                    let Some(owning_system) =
                        star_system_repo.find_by_name(&star_system_name).await?
                    else {
                        tracing::error!(
                            name = %name,
                            star_system = %star_system_name,
                            "Space station {} references unknown star system, aborting batch",
                            name
                        );
                        return Err(SyncError::StarSystemNotFound {
                            space_station: name,
                            star_system: star_system_name,
                        }
                        .into());
                    };

                    let planet_id = match space_station.planet_name.as_deref() {
                        Some(planet_name) if !planet_name.is_empty() => planet_repo
                            .find_by_name(planet_name)
                            .await?
                            .map(|planet| planet.id),
                        _ => None,
                    };

                    let moon_id = match space_station.moon_name.as_deref() {
                        Some(moon_name) if !moon_name.is_empty() => moon_repo
                            .find_by_name(moon_name)
                            .await?
                            .map(|moon| moon.id),
                        _ => None,
                    };

                    let links = SpaceStationLinks {
                        star_system_id: owning_system.id,
                        planet_id,
                        moon_id,
                    };

                    match space_station_repo.find_by_name(&name).await? {
                        Some(existing) => {
                            space_station_repo
                                .update(existing, space_station, links)
                                .await
                                .map_err(|e| log_save_error("space station", &name, e))?;
                            counts.updated += 1;
                        }
                        None => {
                            space_station_repo
                                .create(space_station, links)
                                .await
                                .map_err(|e| log_save_error("space station", &name, e))?;
                            counts.created += 1;
                        }
                    }
                }

                txn.commit().await?;

                Ok(counts)
            })
        })
        .await
    }
}
