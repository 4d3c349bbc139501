//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! The context owns an in-memory SQLite database, the mockito server standing in for UEX,
//! and a UEX client configured against that server.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::{TEST_UEX_API_KEY, TEST_USER_AGENT},
    error::TestError,
};

/// Test environment produced by `TestBuilder::build()`.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_catalogue_tables().build().await?;
///
/// let db = &test.db;
/// let client = &test.uex_client;
///
/// test.store().insert_mock_star_system(1, "ST", "Stanton").await?;
/// test.uex().create_planet_endpoint(1, vec![], 1);
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// UEX client configured to use the mock server
    pub uex_client: uex::Client,

    /// Mock HTTP server standing in for UEX
    pub(crate) server: ServerGuard,
    /// Mock endpoints checked by [`TestContext::assert_mocks`]
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the database and UEX client into any type that can be built from them.
    ///
    /// Lets integration tests build the application state without this crate depending on
    /// the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, uex::Client)>,
    {
        T::from((self.db.clone(), self.uex_client.clone()))
    }

    /// Base URL of the mock UEX server.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Direct access to the mock server for one-off endpoints (error statuses, malformed bodies).
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let uex_client = uex::Client::builder()
            .base_url(&mock_server.url())
            .api_key(TEST_UEX_API_KEY)
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            uex_client,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert every mock endpoint registered through the builder or fixtures was called the
    /// expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
