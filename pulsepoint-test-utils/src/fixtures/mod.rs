//! Fixtures used while a test runs.
//!
//! - `factory` - UEX wire models with sensible test values
//! - `mockito` - mock UEX endpoints registered on the test server
//! - `store` - records inserted straight into the test database

pub mod factory;
pub mod mockito;
pub mod store;

use crate::TestContext;

impl TestContext {
    /// Mock UEX endpoint helpers.
    pub fn uex(&mut self) -> UexFixtures<'_> {
        UexFixtures { context: self }
    }

    /// Database record helpers.
    pub fn store(&self) -> StoreFixtures<'_> {
        StoreFixtures { context: self }
    }
}

pub struct UexFixtures<'a> {
    pub(crate) context: &'a mut TestContext,
}

pub struct StoreFixtures<'a> {
    pub(crate) context: &'a TestContext,
}
