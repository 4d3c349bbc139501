use crate::{
    error::Error,
    model::universe::{Moon, Planet, SpaceStation, StarSystem},
    Client,
};

/// Query parameter scoping planets, moons and stations to one star system.
const STAR_SYSTEM_QUERY: &str = "id_star_system";

pub struct UniverseEndpoints<'a> {
    client: &'a Client,
}

impl<'a> UniverseEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every star system known to UEX, including unavailable and hidden ones.
    pub async fn get_star_systems(&self) -> Result<Vec<StarSystem>, Error> {
        self.client.fetch("star_systems", &[]).await
    }

    /// Lists the planets of the star system with UEX ID `star_system_id`.
    pub async fn get_planets(&self, star_system_id: i64) -> Result<Vec<Planet>, Error> {
        self.client
            .fetch("planets", &[(STAR_SYSTEM_QUERY, star_system_id.to_string())])
            .await
    }

    /// Lists the moons of the star system with UEX ID `star_system_id`.
    pub async fn get_moons(&self, star_system_id: i64) -> Result<Vec<Moon>, Error> {
        self.client
            .fetch("moons", &[(STAR_SYSTEM_QUERY, star_system_id.to_string())])
            .await
    }

    /// Lists the space stations of the star system with UEX ID `star_system_id`.
    pub async fn get_space_stations(
        &self,
        star_system_id: i64,
    ) -> Result<Vec<SpaceStation>, Error> {
        self.client
            .fetch(
                "space_stations",
                &[(STAR_SYSTEM_QUERY, star_system_id.to_string())],
            )
            .await
    }
}
