//! Test doubles for the platform adapter.

mod mock_platform;

pub use mock_platform::MockPlatform;
