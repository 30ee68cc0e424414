//! Backend endpoint selection per build environment and platform.

/// Which backend deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on the local machine.
    Development,
    /// Hosted backend.
    Production,
}

/// The platform the client runs on. Only matters in development, where
/// emulated Android cannot reach the host machine via `localhost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Other,
}

const LOCAL_URL: &str = "http://localhost:3000";
// Android emulator loopback alias for the host machine.
const ANDROID_LOCAL_URL: &str = "http://10.0.2.2:3000";
const HOSTED_URL: &str = "https://rigorous-heartbreaking-cephalopod.glitch.me";

/// Resolved backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Picks the base URL for the given environment and platform.
    pub fn for_environment(environment: Environment, platform: Platform) -> Self {
        let base_url = match (environment, platform) {
            (Environment::Development, Platform::Android) => ANDROID_LOCAL_URL,
            (Environment::Development, _) => LOCAL_URL,
            (Environment::Production, _) => HOSTED_URL,
        };
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Uses an explicit base URL, e.g. for tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
