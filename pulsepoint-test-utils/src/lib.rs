//! Test harness for PulsePoint.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables, database fixtures
//! and mock UEX endpoints a test needs, and `build()` turns that into a [`TestContext`] holding
//! an in-memory SQLite database and a UEX client pointed at a mockito server.
//!
//! ```ignore
//! use pulsepoint_test_utils::prelude::*;
//!
//! let test = TestBuilder::new()
//!     .with_catalogue_tables()
//!     .with_commodity_endpoint(vec![factory::mock_commodity("GOLD", "Gold")], 1)
//!     .build()
//!     .await?;
//!
//! // exercise code using `test.db` and `test.uex_client`
//!
//! test.assert_mocks();
//! ```

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
