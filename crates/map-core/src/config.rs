//! Widget configuration and the partial options merged into it.
//!
//! [`PaperConfig`] is the complete, typed configuration a widget renders
//! from. Callers never build it by hand from JSON; they supply
//! [`PaperOptions`], a mirror of the same tree where every field is optional,
//! and merge it over the defaults (or over the current configuration on
//! update). Unknown fields are rejected at deserialization time.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Rotation {
    fn default() -> Self {
        let [x, y, z] = DEFAULT_ROTATION_DEG;
        Self { x, y, z }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub fold_angle: f64,
    pub rotation: Rotation,
    /// Derived by [`crate::geometry::calculate`]; overwritten on every render.
    pub offset: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fold_angle: DEFAULT_FOLD_ANGLE_DEG,
            rotation: Rotation::default(),
            offset: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Aspect {
    pub background: String,
    pub seams: String,
    pub shadow: String,
}

impl Default for Aspect {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            seams: DEFAULT_SEAMS.to_string(),
            shadow: DEFAULT_SHADOW.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PiecesConfig {
    pub amount: usize,
    pub width: f64,
    /// Derived from `ratio * width`; overwritten on every render.
    pub height: f64,
    pub ratio: f64,
    pub aspect: Aspect,
}

impl Default for PiecesConfig {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            width: DEFAULT_WIDTH_PX,
            height: DEFAULT_HEIGHT_PX,
            ratio: DEFAULT_RATIO,
            aspect: Aspect::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaperConfig {
    pub map: MapConfig,
    pub pieces: PiecesConfig,
}

// ---------------- Partial options ----------------

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationOptions {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MapOptions {
    pub fold_angle: Option<f64>,
    pub rotation: Option<RotationOptions>,
    pub offset: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AspectOptions {
    pub background: Option<String>,
    pub seams: Option<String>,
    pub shadow: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PiecesOptions {
    pub amount: Option<usize>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub ratio: Option<f64>,
    pub aspect: Option<AspectOptions>,
}

/// User-supplied overrides. Absent fields leave the target untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaperOptions {
    pub map: Option<MapOptions>,
    pub pieces: Option<PiecesOptions>,
}

fn set<T: Clone>(dst: &mut T, src: &Option<T>) {
    if let Some(v) = src {
        *dst = v.clone();
    }
}

impl PaperConfig {
    /// Defaults merged with `options`, then validated.
    pub fn from_options(options: Option<&PaperOptions>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(opts) = options {
            config.merge(opts);
        }
        config.validate()?;
        Ok(config)
    }

    /// Copy every field present in `options` over `self`.
    pub fn merge(&mut self, options: &PaperOptions) {
        if let Some(map) = &options.map {
            set(&mut self.map.fold_angle, &map.fold_angle);
            set(&mut self.map.offset, &map.offset);
            if let Some(rot) = &map.rotation {
                set(&mut self.map.rotation.x, &rot.x);
                set(&mut self.map.rotation.y, &rot.y);
                set(&mut self.map.rotation.z, &rot.z);
            }
        }
        if let Some(pieces) = &options.pieces {
            set(&mut self.pieces.amount, &pieces.amount);
            set(&mut self.pieces.width, &pieces.width);
            set(&mut self.pieces.height, &pieces.height);
            set(&mut self.pieces.ratio, &pieces.ratio);
            if let Some(aspect) = &pieces.aspect {
                set(&mut self.pieces.aspect.background, &aspect.background);
                set(&mut self.pieces.aspect.seams, &aspect.seams);
                set(&mut self.pieces.aspect.shadow, &aspect.shadow);
            }
        }
    }

    /// Clone of `self` with `options` merged and the result validated.
    /// `self` is left untouched when validation fails.
    pub fn merged(&self, options: &PaperOptions) -> Result<Self, ConfigError> {
        let mut next = self.clone();
        next.merge(options);
        next.validate()?;
        Ok(next)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let pieces = &self.pieces;
        if pieces.amount == 0 {
            return Err(ConfigError::NoPieces);
        }
        if pieces.amount > MAX_AMOUNT {
            return Err(ConfigError::TooManyPieces {
                amount: pieces.amount,
                max: MAX_AMOUNT,
            });
        }
        positive("width", pieces.width)?;
        positive("ratio", pieces.ratio)?;
        bounded("width", pieces.width)?;
        bounded("height", pieces.ratio * pieces.width)?;

        let map = &self.map;
        finite("map.rotation.x", map.rotation.x)?;
        finite("map.rotation.y", map.rotation.y)?;
        finite("map.rotation.z", map.rotation.z)?;
        finite("map.foldAngle", map.fold_angle)?;
        if map.fold_angle.abs() >= MAX_FOLD_ANGLE_DEG {
            return Err(ConfigError::FoldAngleOutOfRange(map.fold_angle));
        }

        color("background", &pieces.aspect.background)?;
        color("seams", &pieces.aspect.seams)?;
        color("shadow", &pieces.aspect.shadow)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn bounded(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value <= MAX_DIMENSION_PX {
        Ok(())
    } else {
        Err(ConfigError::TooLarge {
            field,
            value,
            max: MAX_DIMENSION_PX,
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

// Hex colors are checked strictly; anything else (named colors, rgb(), var())
// is handed to the browser as-is, minus characters that could end a
// declaration or the surrounding attribute.
fn color(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let v = value.trim();
    let ok = match v.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => !v.is_empty() && !v.contains(|c: char| matches!(c, ';' | '"' | '<' | '>' | '\\')),
    };
    if ok {
        Ok(())
    } else {
        Err(ConfigError::BadColor {
            field,
            value: value.to_string(),
        })
    }
}
