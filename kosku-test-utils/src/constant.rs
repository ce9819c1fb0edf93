//! Test configuration constants.
//!
//! Placeholder credentials and URLs used across all tests. None of these are real
//! secrets.

/// Secret used to sign bearer tokens in tests.
pub static TEST_JWT_SECRET: &str = "kosku-test-jwt-secret";

/// Midtrans server key the mock Snap client is built with.
pub static TEST_SERVER_KEY: &str = "SB-Mid-server-test";

/// Password every fixture user is created with.
pub static TEST_PASSWORD: &str = "rahasia123";

/// Public base URL listing images are served from in tests.
pub static TEST_PUBLIC_ASSET_URL: &str = "http://localhost:8080/uploads";

/// Valid Indonesian mobile number used for fixture listings.
pub static TEST_PHONE: &str = "081234567890";
