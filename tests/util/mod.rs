//! Helpers for building application state in integration tests.

use pulsepoint::server::model::app::{AppSettings, AppState};
use pulsepoint_test_utils::TestContext;

pub static TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Extension trait for TestContext to create AppState with test settings
pub trait TestContextExt {
    /// State with an admin token set and sync failures hidden, as configured by default
    fn into_app_state(&self) -> AppState;

    /// State answering sync triggers with the outcome of the pass
    fn into_reporting_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let mut state: AppState = self.to_app_state();
        state.settings = AppSettings {
            admin_token: TEST_ADMIN_TOKEN.to_string(),
            ..AppSettings::default()
        };

        state
    }

    fn into_reporting_app_state(&self) -> AppState {
        let mut state = self.into_app_state();
        state.settings.report_sync_failures = true;

        state
    }
}
