//! Mock UEX endpoints.
//!
//! Each endpoint answers with a `{"data": [...]}` envelope and only matches requests carrying
//! the test bearer key. Expected hits are verified by
//! [`TestContext::assert_mocks`](crate::TestContext::assert_mocks).

use mockito::{Matcher, Mock};
use serde_json::json;
use uex::model::{
    commodity::Commodity,
    universe::{Moon, Planet, SpaceStation, StarSystem},
};

use crate::{constant::TEST_UEX_API_KEY, fixtures::UexFixtures};

impl<'a> UexFixtures<'a> {
    /// Mock `GET /commodities`.
    pub fn create_commodity_endpoint(
        &mut self,
        commodities: Vec<Commodity>,
        expected_requests: usize,
    ) -> Mock {
        self.create_endpoint(
            "/commodities",
            None,
            json!({ "data": commodities }),
            expected_requests,
        )
    }

    /// Mock `GET /star_systems`.
    pub fn create_star_system_endpoint(
        &mut self,
        star_systems: Vec<StarSystem>,
        expected_requests: usize,
    ) -> Mock {
        self.create_endpoint(
            "/star_systems",
            None,
            json!({ "data": star_systems }),
            expected_requests,
        )
    }

    /// Mock `GET /planets?id_star_system=<star_system_id>`.
    pub fn create_planet_endpoint(
        &mut self,
        star_system_id: i64,
        planets: Vec<Planet>,
        expected_requests: usize,
    ) -> Mock {
        self.create_endpoint(
            "/planets",
            Some(star_system_id),
            json!({ "data": planets }),
            expected_requests,
        )
    }

    /// Mock `GET /moons?id_star_system=<star_system_id>`.
    pub fn create_moon_endpoint(
        &mut self,
        star_system_id: i64,
        moons: Vec<Moon>,
        expected_requests: usize,
    ) -> Mock {
        self.create_endpoint(
            "/moons",
            Some(star_system_id),
            json!({ "data": moons }),
            expected_requests,
        )
    }

    /// Mock `GET /space_stations?id_star_system=<star_system_id>`.
    pub fn create_space_station_endpoint(
        &mut self,
        star_system_id: i64,
        space_stations: Vec<SpaceStation>,
        expected_requests: usize,
    ) -> Mock {
        self.create_endpoint(
            "/space_stations",
            Some(star_system_id),
            json!({ "data": space_stations }),
            expected_requests,
        )
    }

    /// Mock an endpoint answering with `status` and an empty body.
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    fn create_endpoint(
        &mut self,
        path: &str,
        star_system_id: Option<i64>,
        body: serde_json::Value,
        expected_requests: usize,
    ) -> Mock {
        let query = match star_system_id {
            Some(id) => Matcher::UrlEncoded("id_star_system".to_string(), id.to_string()),
            None => Matcher::Any,
        };

        self.context
            .server
            .mock("GET", path)
            .match_query(query)
            .match_header("authorization", format!("Bearer {}", TEST_UEX_API_KEY).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
