//! Configuration for the [`crate::Geohasher`] facade.
//!
//! Configuration is plain serde data so it can be kept in JSON or TOML next
//! to the rest of an application's settings.

use crate::alphabet::MAX_PRECISION;
use crate::codec::DEFAULT_EPSILON;
use crate::distance::DistanceTier;
use crate::error::{GeohashError, Result};
use geocell_types::formula::R_M;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geohashing configuration
///
/// # Example
///
/// ```rust
/// use geocell::Config;
///
/// let config = Config::default();
/// assert_eq!(config.default_precision, None);
///
/// let json = r#"{
///     "default_precision": 9,
///     "adjust_latitude": true
/// }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.default_precision, Some(9));
/// assert!(!config.wrap_longitude);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed encode precision (1-12). `None` picks the shortest geohash that
    /// reproduces the input.
    #[serde(default)]
    pub default_precision: Option<usize>,

    /// Round-trip tolerance for automatic precision, in degrees
    #[serde(default = "Config::default_auto_precision_epsilon")]
    pub auto_precision_epsilon: f64,

    /// Sphere radius for tier 2 and 3 distances (meters by default)
    #[serde(default = "Config::default_earth_radius")]
    pub earth_radius: f64,

    /// Scale flat-earth longitude deltas by the cosine of the mean latitude
    #[serde(default)]
    pub adjust_latitude: bool,

    /// Unroll longitude deltas across the antimeridian
    #[serde(default)]
    pub wrap_longitude: bool,

    /// Tier used by `Geohasher::default_distance`
    #[serde(default)]
    pub distance_tier: DistanceTier,
}

impl Config {
    const fn default_auto_precision_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    const fn default_earth_radius() -> f64 {
        R_M
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.default_precision = Some(precision);
        self
    }

    pub fn with_auto_precision(mut self, epsilon: f64) -> Self {
        self.default_precision = None;
        self.auto_precision_epsilon = epsilon;
        self
    }

    pub fn with_earth_radius(mut self, radius: f64) -> Self {
        self.earth_radius = radius;
        self
    }

    pub fn with_adjust_latitude(mut self, adjust: bool) -> Self {
        self.adjust_latitude = adjust;
        self
    }

    pub fn with_wrap_longitude(mut self, wrap: bool) -> Self {
        self.wrap_longitude = wrap;
        self
    }

    pub fn with_distance_tier(mut self, tier: DistanceTier) -> Self {
        self.distance_tier = tier;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(precision) = self.default_precision
            && !(1..=MAX_PRECISION).contains(&precision)
        {
            return Err(GeohashError::InvalidConfig(format!(
                "default precision must be between 1 and {}, got {}",
                MAX_PRECISION, precision
            )));
        }

        if !self.auto_precision_epsilon.is_finite() || self.auto_precision_epsilon <= 0.0 {
            return Err(GeohashError::InvalidConfig(format!(
                "auto precision epsilon must be finite and positive, got {}",
                self.auto_precision_epsilon
            )));
        }

        if !self.earth_radius.is_finite() || self.earth_radius <= 0.0 {
            return Err(GeohashError::InvalidConfig(format!(
                "earth radius must be finite and positive, got {}",
                self.earth_radius
            )));
        }

        Ok(())
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as a JSON string
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded geohash config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load configuration from a TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)
            .map_err(|e| GeohashError::InvalidConfig(format!("TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as a TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GeohashError::InvalidConfig(format!("TOML: {}", e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_precision: None,
            auto_precision_epsilon: Self::default_auto_precision_epsilon(),
            earth_radius: Self::default_earth_radius(),
            adjust_latitude: false,
            wrap_longitude: false,
            distance_tier: DistanceTier::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.earth_radius, R_M);
        assert_eq!(config.auto_precision_epsilon, f64::EPSILON);
        assert_eq!(config.distance_tier, DistanceTier::GreatCircle);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_precision(7)
            .with_earth_radius(6_378_137.0)
            .with_adjust_latitude(true)
            .with_wrap_longitude(true)
            .with_distance_tier(DistanceTier::FlatEarth);
        assert_eq!(config.default_precision, Some(7));
        assert!(config.adjust_latitude && config.wrap_longitude);
        assert!(config.validate().is_ok());

        let auto = config.with_auto_precision(1e-6);
        assert_eq!(auto.default_precision, None);
        assert_eq!(auto.auto_precision_epsilon, 1e-6);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        for config in [
            Config::default().with_precision(0),
            Config::default().with_precision(13),
            Config::default().with_auto_precision(0.0),
            Config::default().with_auto_precision(f64::NAN),
            Config::default().with_earth_radius(-1.0),
            Config::default().with_earth_radius(f64::INFINITY),
        ] {
            assert!(matches!(
                config.validate(),
                Err(GeohashError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_json_defaults_and_roundtrip() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config = Config::from_json_str(r#"{"distance_tier": "flat_earth"}"#).unwrap();
        assert_eq!(config.distance_tier, DistanceTier::FlatEarth);

        let json = config.to_json_string().unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_json_invalid() {
        assert!(matches!(
            Config::from_json_str(r#"{"default_precision": 20}"#),
            Err(GeohashError::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_json_str("not json"),
            Err(GeohashError::Serialization(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_precision": 5, "wrap_longitude": true}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.default_precision, Some(5));
        assert!(config.wrap_longitude);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            Config::from_file(missing),
            Err(GeohashError::Io(_))
        ));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_roundtrip() {
        let text = "default_precision = 6\nadjust_latitude = true\n";
        let config = Config::from_toml_str(text).unwrap();
        assert_eq!(config.default_precision, Some(6));
        assert!(config.adjust_latitude);

        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
        assert!(Config::from_toml_str("earth_radius = 0.0").is_err());
    }
}
