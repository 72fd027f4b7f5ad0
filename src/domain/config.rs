use serde::{Deserialize, Serialize};

use super::error::ConfigError;

pub const DEFAULT_SEED: u32 = 0x9E37_79B9;

/// Ballpit configuration as sent by the JS side.
///
/// Keys are camelCase and every key is optional; missing keys take the
/// defaults below. Call [`BallpitConfig::validate`] (or use
/// [`BallpitConfig::from_json`]) before handing it to a simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BallpitConfig {
    /// Number of spheres, fixed for the lifetime of the simulation
    pub count: usize,
    /// Vertical acceleration scale. `0` switches Y to a closed box
    pub gravity: f32,
    /// Per-frame velocity multiplier in `(0, 1]`
    pub friction: f32,
    /// Fraction of velocity kept (reversed) on wall contact
    pub wall_bounce: f32,
    /// Hard cap on speed after integration
    pub max_velocity: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Radius of slot 0 (the cursor sphere)
    pub size0: f32,
    /// Render hint: draw slot 0 and use it as the light anchor
    pub follow_cursor: bool,

    // Initial half extents; the renderer overrides X/Y on every resize.
    pub max_x: f32,
    pub max_y: f32,
    pub max_z: f32,

    /// Lower bound of the velocity kick between two dynamic spheres
    pub peer_kick_floor: f32,
    /// Lower bound of the velocity kick the cursor sphere hands out
    pub attractor_kick_floor: f32,
    /// Lerp factor pulling slot 0 toward the cursor target each frame
    pub attractor_smoothing: f32,

    /// Seed for the initial layout. `0` is remapped (xorshift needs non-zero)
    pub seed: u32,
}

impl Default for BallpitConfig {
    fn default() -> Self {
        Self {
            count: 200,
            gravity: 0.5,
            friction: 0.9975,
            wall_bounce: 0.95,
            max_velocity: 0.15,
            min_size: 0.5,
            max_size: 1.0,
            size0: 1.0,
            follow_cursor: true,
            max_x: 5.0,
            max_y: 5.0,
            max_z: 2.0,
            peer_kick_floor: 1.0,
            attractor_kick_floor: 2.0,
            attractor_smoothing: 0.1,
            seed: DEFAULT_SEED,
        }
    }
}

impl BallpitConfig {
    /// Parse a (possibly partial) JSON object and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BallpitConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Effective configuration as JSON (for the debug panel).
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Check every option once. The step loop relies on these rules and
    /// never re-checks them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyCount);
        }
        check_gravity(self.gravity)?;
        check_friction(self.friction)?;
        check_wall_bounce(self.wall_bounce)?;
        check_max_velocity(self.max_velocity)?;

        check_positive("minSize", self.min_size)?;
        check_positive("maxSize", self.max_size)?;
        check_positive("size0", self.size0)?;
        if self.max_size < self.min_size {
            return Err(ConfigError::SizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }

        check_positive("maxX", self.max_x)?;
        check_positive("maxY", self.max_y)?;
        check_positive("maxZ", self.max_z)?;

        check_non_negative("peerKickFloor", self.peer_kick_floor)?;
        check_non_negative("attractorKickFloor", self.attractor_kick_floor)?;

        let s = self.attractor_smoothing;
        if !s.is_finite() {
            return Err(ConfigError::NotFinite("attractorSmoothing"));
        }
        if s <= 0.0 || s > 1.0 {
            return Err(ConfigError::Smoothing(s));
        }
        Ok(())
    }
}

pub(crate) fn check_gravity(v: f32) -> Result<f32, ConfigError> {
    if !v.is_finite() {
        return Err(ConfigError::NotFinite("gravity"));
    }
    Ok(v)
}

pub(crate) fn check_friction(v: f32) -> Result<f32, ConfigError> {
    if !v.is_finite() {
        return Err(ConfigError::NotFinite("friction"));
    }
    if v <= 0.0 || v > 1.0 {
        return Err(ConfigError::Friction(v));
    }
    Ok(v)
}

pub(crate) fn check_wall_bounce(v: f32) -> Result<f32, ConfigError> {
    if !v.is_finite() {
        return Err(ConfigError::NotFinite("wallBounce"));
    }
    if !(0.0..=1.0).contains(&v) {
        return Err(ConfigError::WallBounce(v));
    }
    Ok(v)
}

pub(crate) fn check_max_velocity(v: f32) -> Result<f32, ConfigError> {
    check_positive("maxVelocity", v)
}

pub(crate) fn check_positive(field: &'static str, v: f32) -> Result<f32, ConfigError> {
    if !v.is_finite() {
        return Err(ConfigError::NotFinite(field));
    }
    if v <= 0.0 {
        return Err(ConfigError::NotPositive(field, v));
    }
    Ok(v)
}

fn check_non_negative(field: &'static str, v: f32) -> Result<f32, ConfigError> {
    if !v.is_finite() {
        return Err(ConfigError::NotFinite(field));
    }
    if v < 0.0 {
        return Err(ConfigError::Negative(field, v));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(BallpitConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg = BallpitConfig::from_json(r#"{"count": 12, "wallBounce": 0.5, "followCursor": false}"#)
            .expect("partial config should parse");
        assert_eq!(cfg.count, 12);
        assert_eq!(cfg.wall_bounce, 0.5);
        assert!(!cfg.follow_cursor);
        assert_eq!(cfg.friction, BallpitConfig::default().friction);
        assert_eq!(cfg.attractor_kick_floor, 2.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut cfg = BallpitConfig::default();
        cfg.friction = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::Friction(0.0)));

        let mut cfg = BallpitConfig::default();
        cfg.wall_bounce = 1.5;
        assert_eq!(cfg.validate(), Err(ConfigError::WallBounce(1.5)));

        let mut cfg = BallpitConfig::default();
        cfg.count = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyCount));

        let mut cfg = BallpitConfig::default();
        cfg.min_size = 2.0;
        cfg.max_size = 1.0;
        assert_eq!(cfg.validate(), Err(ConfigError::SizeRange { min: 2.0, max: 1.0 }));

        let mut cfg = BallpitConfig::default();
        cfg.gravity = f32::NAN;
        assert_eq!(cfg.validate(), Err(ConfigError::NotFinite("gravity")));

        let mut cfg = BallpitConfig::default();
        cfg.size0 = -1.0;
        assert_eq!(cfg.validate(), Err(ConfigError::NotPositive("size0", -1.0)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        match BallpitConfig::from_json("{ count: ") {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn json_round_trips_through_camel_case_keys() {
        let json = BallpitConfig::default().to_json();
        assert!(json.contains("\"wallBounce\""));
        assert!(json.contains("\"attractorKickFloor\""));
        assert_eq!(BallpitConfig::from_json(&json), Ok(BallpitConfig::default()));
    }
}
