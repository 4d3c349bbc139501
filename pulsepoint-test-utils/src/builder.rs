//! Declarative test setup.
//!
//! Configuration calls on [`TestBuilder`] are queued and applied in a fixed order by
//! [`TestBuilder::build`]: tables, then database fixtures, then mock endpoints.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use uex::model::{
    commodity::Commodity,
    universe::{Moon, Planet, SpaceStation, StarSystem},
};

use crate::{error::TestError, TestContext};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for test environments.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalogue_tables: bool,
    include_outpost_tables: bool,

    // Database fixtures, inserted in this order
    commodities: Vec<(String, String)>,   // (code, name)
    star_systems: Vec<(i64, String, String)>, // (uex_id, code, name)
    planets: Vec<(i64, String, String)>,  // (uex_id, code, name)

    mock_builders: Vec<MockBuilder>,

    commodity_endpoints: Vec<(Vec<Commodity>, usize)>,
    star_system_endpoints: Vec<(Vec<StarSystem>, usize)>,
    planet_endpoints: Vec<(i64, Vec<Planet>, usize)>,
    moon_endpoints: Vec<(i64, Vec<Moon>, usize)>,
    space_station_endpoints: Vec<(i64, Vec<SpaceStation>, usize)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalogue_tables: false,
            include_outpost_tables: false,
            commodities: Vec::new(),
            star_systems: Vec::new(),
            planets: Vec::new(),
            mock_builders: Vec::new(),
            commodity_endpoints: Vec::new(),
            star_system_endpoints: Vec::new(),
            planet_endpoints: Vec::new(),
            moon_endpoints: Vec::new(),
            space_station_endpoints: Vec::new(),
        }
    }

    /// Create the tables synchronised from UEX: commodity, star system, planet, moon and
    /// space station.
    pub fn with_catalogue_tables(mut self) -> Self {
        self.include_catalogue_tables = true;
        self
    }

    /// Create the catalogue tables plus outpost, outpost commodity and commodity change.
    pub fn with_outpost_tables(mut self) -> Self {
        self.include_catalogue_tables = true;
        self.include_outpost_tables = true;
        self
    }

    /// Create the table for a single entity.
    ///
    /// Tables are created in call order, so entities referenced by foreign keys go first.
    ///
    /// ```no_run
    /// use pulsepoint_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), pulsepoint_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::StarSystem)
    ///     .with_table(entity::prelude::Planet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a commodity record.
    pub fn with_mock_commodity(mut self, code: &str, name: &str) -> Self {
        self.commodities.push((code.to_string(), name.to_string()));
        self
    }

    /// Insert a star system record.
    pub fn with_mock_star_system(mut self, uex_id: i64, code: &str, name: &str) -> Self {
        self.star_systems
            .push((uex_id, code.to_string(), name.to_string()));
        self
    }

    /// Insert a planet record not linked to any star system.
    pub fn with_mock_planet(mut self, uex_id: i64, code: &str, name: &str) -> Self {
        self.planets
            .push((uex_id, code.to_string(), name.to_string()));
        self
    }

    /// Register an arbitrary mock endpoint.
    ///
    /// Custom endpoints are created before the shortcut endpoints so a test can queue an
    /// error response ahead of a success response for the same path.
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    pub fn with_commodity_endpoint(
        mut self,
        commodities: Vec<Commodity>,
        expected_requests: usize,
    ) -> Self {
        self.commodity_endpoints
            .push((commodities, expected_requests));
        self
    }

    pub fn with_star_system_endpoint(
        mut self,
        star_systems: Vec<StarSystem>,
        expected_requests: usize,
    ) -> Self {
        self.star_system_endpoints
            .push((star_systems, expected_requests));
        self
    }

    pub fn with_planet_endpoint(
        mut self,
        star_system_id: i64,
        planets: Vec<Planet>,
        expected_requests: usize,
    ) -> Self {
        self.planet_endpoints
            .push((star_system_id, planets, expected_requests));
        self
    }

    pub fn with_moon_endpoint(
        mut self,
        star_system_id: i64,
        moons: Vec<Moon>,
        expected_requests: usize,
    ) -> Self {
        self.moon_endpoints
            .push((star_system_id, moons, expected_requests));
        self
    }

    pub fn with_space_station_endpoint(
        mut self,
        star_system_id: i64,
        space_stations: Vec<SpaceStation>,
        expected_requests: usize,
    ) -> Self {
        self.space_station_endpoints
            .push((star_system_id, space_stations, expected_requests));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Tables created, fixtures inserted and endpoints registered
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::UexError)` - The test UEX client could not be built
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        // 1. Tables, parents before children
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_catalogue_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Commodity),
                schema.create_table_from_entity(entity::prelude::StarSystem),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Moon),
                schema.create_table_from_entity(entity::prelude::SpaceStation),
            ]);
        }

        if self.include_outpost_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Outpost),
                schema.create_table_from_entity(entity::prelude::OutpostCommodity),
                schema.create_table_from_entity(entity::prelude::CommodityChange),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        // 2. Database fixtures
        for (code, name) in self.commodities {
            context.store().insert_mock_commodity(&code, &name).await?;
        }

        for (uex_id, code, name) in self.star_systems {
            context
                .store()
                .insert_mock_star_system(uex_id, &code, &name)
                .await?;
        }

        for (uex_id, code, name) in self.planets {
            context
                .store()
                .insert_mock_planet(uex_id, &code, &name, None)
                .await?;
        }

        // 3. Mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for (commodities, expected) in self.commodity_endpoints {
            mocks.push(context.uex().create_commodity_endpoint(commodities, expected));
        }

        for (star_systems, expected) in self.star_system_endpoints {
            mocks.push(
                context
                    .uex()
                    .create_star_system_endpoint(star_systems, expected),
            );
        }

        for (star_system_id, planets, expected) in self.planet_endpoints {
            mocks.push(
                context
                    .uex()
                    .create_planet_endpoint(star_system_id, planets, expected),
            );
        }

        for (star_system_id, moons, expected) in self.moon_endpoints {
            mocks.push(
                context
                    .uex()
                    .create_moon_endpoint(star_system_id, moons, expected),
            );
        }

        for (star_system_id, space_stations, expected) in self.space_station_endpoints {
            mocks.push(context.uex().create_space_station_endpoint(
                star_system_id,
                space_stations,
                expected,
            ));
        }

        context.mocks.extend(mocks);

        Ok(context)
    }
}
