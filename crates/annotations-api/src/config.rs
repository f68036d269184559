//! Environment-driven service configuration.
//!
//! All settings are read once at startup. `CACHE_DURATION` accepts the
//! usual duration notation (`30s`, `2h45m`, `100ms`); an unparsable value
//! is a startup error rather than a silently wrong Cache-Control header.

use std::time::Duration;

use annotations_core::{Error, Result};
use annotations_store::{DEFAULT_NEO_DATABASE, DEFAULT_NEO_URL};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default public API root used when building `apiUrl` fields.
pub const DEFAULT_PUBLIC_API_URL: &str = "http://api.ft.com";

/// Default Cache-Control max-age source.
pub const DEFAULT_CACHE_DURATION: &str = "30s";

/// Default location of the OpenAPI document served at `/__api`.
pub const DEFAULT_API_YML: &str = "./api.yml";

/// Default system code reported by `/__health`.
pub const DEFAULT_APP_SYSTEM_CODE: &str = "annotationsapi";

/// Default application name reported by `/__health`.
pub const DEFAULT_APP_NAME: &str = "public-annotations-api";

/// Fixed service description reported by `/__health`.
pub const APP_DESCRIPTION: &str = "A public RESTful API for accessing Annotations in neo4j";

/// Service configuration, resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub neo_url: String,
    pub neo_database: String,
    pub public_api_url: String,
    pub cache_duration: Duration,
    pub api_yml: String,
    pub log_level: String,
    pub log_format: String,
    pub app_system_code: String,
    pub app_name: String,
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | PORT | 8080 |
    /// | NEO_URL | http://localhost:7474 |
    /// | NEO_DATABASE | neo4j |
    /// | PUBLIC_API_URL | http://api.ft.com |
    /// | CACHE_DURATION | 30s |
    /// | API_YML | ./api.yml |
    /// | LOG_LEVEL | info |
    /// | LOG_FORMAT | text |
    /// | APP_SYSTEM_CODE | annotationsapi |
    /// | APP_NAME | public-annotations-api |
    pub fn from_env() -> Result<Self> {
        let port_raw = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let port: u16 = port_raw
            .parse()
            .map_err(|_| Error::Config(format!("invalid PORT value: {:?}", port_raw)))?;

        let cache_raw =
            std::env::var("CACHE_DURATION").unwrap_or_else(|_| DEFAULT_CACHE_DURATION.to_string());
        let cache_duration = parse_duration(&cache_raw)?;

        Ok(Self {
            port,
            neo_url: std::env::var("NEO_URL").unwrap_or_else(|_| DEFAULT_NEO_URL.to_string()),
            neo_database: std::env::var("NEO_DATABASE")
                .unwrap_or_else(|_| DEFAULT_NEO_DATABASE.to_string()),
            public_api_url: std::env::var("PUBLIC_API_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_API_URL.to_string()),
            cache_duration,
            api_yml: std::env::var("API_YML").unwrap_or_else(|_| DEFAULT_API_YML.to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            app_system_code: std::env::var("APP_SYSTEM_CODE")
                .unwrap_or_else(|_| DEFAULT_APP_SYSTEM_CODE.to_string()),
            app_name: std::env::var("APP_NAME")
                .unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
        })
    }

    /// Cache-Control header value for successful annotation responses.
    pub fn cache_control_header(&self) -> String {
        format!(
            "max-age={}, public",
            self.cache_duration.as_secs_f64().round() as u64
        )
    }
}

/// Parses duration notation: one or more number+unit terms, where the unit
/// is one of `ns`, `us`, `ms`, `s`, `m`, `h` and the number may carry a
/// fraction (`1.5h`). Bare `0` is accepted without a unit.
pub fn parse_duration(s: &str) -> Result<Duration> {
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(Error::Config("empty duration".to_string()));
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(|| Error::Config(format!("missing unit in duration {:?}", s)))?;
        if number_end == 0 {
            return Err(Error::Config(format!("invalid duration {:?}", s)));
        }
        let value: f64 = rest[..number_end]
            .parse()
            .map_err(|_| Error::Config(format!("invalid number in duration {:?}", s)))?;
        rest = &rest[number_end..];

        let (unit_secs, unit_len) = if rest.starts_with("ns") {
            (1e-9, 2)
        } else if rest.starts_with("us") {
            (1e-6, 2)
        } else if rest.starts_with("ms") {
            (1e-3, 2)
        } else if rest.starts_with('s') {
            (1.0, 1)
        } else if rest.starts_with('m') {
            (60.0, 1)
        } else if rest.starts_with('h') {
            (3600.0, 1)
        } else {
            return Err(Error::Config(format!("unknown unit in duration {:?}", s)));
        };
        rest = &rest[unit_len..];

        let term = Duration::try_from_secs_f64(value * unit_secs)
            .map_err(|_| Error::Config(format!("duration {:?} out of range", s)))?;
        total = total
            .checked_add(term)
            .ok_or_else(|| Error::Config(format!("duration {:?} out of range", s)))?;
    }

    Ok(total)
}
