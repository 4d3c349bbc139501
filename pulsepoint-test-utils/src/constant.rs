//! Placeholder values used to configure the test UEX client.

/// User agent sent by the test UEX client.
pub static TEST_USER_AGENT: &str = "pulsepoint-tests/0.1 (+https://github.com/pulsepoint)";

/// Bearer key the test UEX client authenticates with, mock endpoints require it.
pub static TEST_UEX_API_KEY: &str = "uex_api_key";
