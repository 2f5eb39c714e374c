use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://dev.virtualearth.net/REST/V1/Routes/Driving";
pub const DEFAULT_ZOOM: f64 = 12.0;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Connection settings for the Bing Maps Routes service.
#[derive(Debug, Clone, PartialEq)]
pub struct BingConfig {
    pub api_key: String,
    pub base_url: String,
    /// Value for the `avoid` query parameter, e.g. `minimizeTolls`.
    pub avoid: Option<String>,
    pub timeout: Option<Duration>,
}

impl BingConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            avoid: None,
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bing: BingConfig,
    pub zoom: f64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any name -> value source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = get("BING_MAPS_KEY").ok_or(ConfigError::Missing("BING_MAPS_KEY"))?;

        let timeout = match get("BING_MAPS_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                Ok(_) => {
                    return Err(invalid("BING_MAPS_TIMEOUT_SECS", value, "must be positive"));
                }
                Err(e) => return Err(invalid("BING_MAPS_TIMEOUT_SECS", value, e)),
            },
            None => None,
        };

        let zoom = match get("ROUTE_VIEWER_ZOOM") {
            Some(value) => match value.parse::<f64>() {
                Ok(zoom) if zoom.is_finite() && zoom >= 0. => zoom,
                Ok(_) => return Err(invalid("ROUTE_VIEWER_ZOOM", value, "must be a non-negative number")),
                Err(e) => return Err(invalid("ROUTE_VIEWER_ZOOM", value, e)),
            },
            None => DEFAULT_ZOOM,
        };

        Ok(Self {
            bing: BingConfig {
                api_key,
                base_url: get("BING_MAPS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                avoid: get("BING_MAPS_AVOID"),
                timeout,
            },
            zoom,
        })
    }
}

fn invalid(name: &'static str, value: String, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("BING_MAPS_KEY", "secret")])).unwrap();

        assert_eq!(config.bing, BingConfig::new("secret"));
        assert_eq!(config.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn reads_optional_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BING_MAPS_KEY", "secret"),
            ("BING_MAPS_BASE_URL", "http://localhost:8080/route"),
            ("BING_MAPS_AVOID", "minimizeTolls"),
            ("BING_MAPS_TIMEOUT_SECS", "15"),
            ("ROUTE_VIEWER_ZOOM", "9.5"),
        ]))
        .unwrap();

        assert_eq!(config.bing.base_url, "http://localhost:8080/route");
        assert_eq!(config.bing.avoid.as_deref(), Some("minimizeTolls"));
        assert_eq!(config.bing.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.zoom, 9.5);
    }

    #[test]
    fn requires_api_key() {
        let result = AppConfig::from_lookup(lookup(&[("BING_MAPS_KEY", "  ")]));

        assert_eq!(result, Err(ConfigError::Missing("BING_MAPS_KEY")));
    }

    #[test]
    fn rejects_bad_numbers() {
        let result = AppConfig::from_lookup(lookup(&[
            ("BING_MAPS_KEY", "secret"),
            ("BING_MAPS_TIMEOUT_SECS", "0"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "BING_MAPS_TIMEOUT_SECS", .. })));

        let result = AppConfig::from_lookup(lookup(&[
            ("BING_MAPS_KEY", "secret"),
            ("ROUTE_VIEWER_ZOOM", "close"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "ROUTE_VIEWER_ZOOM", .. })));
    }
}
