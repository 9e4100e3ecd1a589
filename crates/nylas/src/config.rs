//! Client configuration: regions, base URLs and defaults.
//!
//! The library never reads the process environment itself; callers pass
//! the API key, region and timeout explicitly at construction time.

use std::time::Duration;

/// Base URL for the US (default) region.
pub const US_API_URL: &str = "https://api.us.nylas.com";

/// Base URL for the EU region.
pub const EU_API_URL: &str = "https://api.eu.nylas.com";

/// Default request timeout when the caller does not supply one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Page size used by list endpoints when the caller does not set `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Maximum page size accepted by the provider.
///
/// Values above this are rejected client-side rather than clamped, so a
/// caller never gets silently truncated pages.
pub const MAX_PAGE_SIZE: u32 = 200;

/// A deployment region of the provider API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// United States (default).
    #[default]
    Us,
    /// European Union.
    Eu,
}

impl Region {
    /// Returns the base API URL for this region.
    pub fn api_url(&self) -> &'static str {
        match self {
            Self::Us => US_API_URL,
            Self::Eu => EU_API_URL,
        }
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            other => Err(format!("unknown region: {other} (expected \"us\" or \"eu\")")),
        }
    }
}
