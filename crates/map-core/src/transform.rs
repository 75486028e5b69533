//! CSS transform building.
//!
//! A [`Transform`] is an ordered list of operations serialized into a single
//! `transform` value. Elements always receive the whole list at once, so
//! nothing depends on what was previously written to the style.

use std::fmt;

use smallvec::SmallVec;

use crate::constants::CSS_DECIMALS;
use crate::error::TransformError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn as_css(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    fn parse_for(function: &'static str, axis: &str) -> Result<Self, TransformError> {
        match axis.trim() {
            "" => Err(TransformError::MissingAxis(function)),
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(TransformError::UnknownAxis(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    Translate { axis: Axis, px: f64 },
    Rotate { axis: Axis, deg: f64 },
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransformOp::Translate { axis, px } => {
                write!(f, "translate{}({}px)", axis.as_css(), fmt_css_number(px))
            }
            TransformOp::Rotate { axis, deg } => {
                write!(f, "rotate{}({}deg)", axis.as_css(), fmt_css_number(deg))
            }
        }
    }
}

/// Ordered transform list for one element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: SmallVec<[TransformOp; 4]>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(mut self, axis: Axis, px: f64) -> Self {
        self.ops.push(TransformOp::Translate { axis, px });
        self
    }

    pub fn rotate(mut self, axis: Axis, deg: f64) -> Self {
        self.ops.push(TransformOp::Rotate { axis, deg });
        self
    }

    #[inline]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Total translation along `axis`.
    pub fn translation(&self, axis: Axis) -> f64 {
        self.ops
            .iter()
            .map(|op| match *op {
                TransformOp::Translate { axis: a, px } if a == axis => px,
                _ => 0.0,
            })
            .sum()
    }

    /// Value for the `transform` style property; empty for the identity.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// `translate<AXIS>(<value>px)`.
pub fn translate_css(value: f64, axis: &str) -> Result<String, TransformError> {
    let axis = Axis::parse_for("translate", axis)?;
    Ok(TransformOp::Translate { axis, px: value }.to_string())
}

/// `rotate<AXIS>(<value>deg)`.
pub fn rotate_css(value: f64, axis: &str) -> Result<String, TransformError> {
    let axis = Axis::parse_for("rotate", axis)?;
    Ok(TransformOp::Rotate { axis, deg: value }.to_string())
}

/// Fixed precision with trailing zeros trimmed; never prints `-0`.
pub fn fmt_css_number(value: f64) -> String {
    let s = format!("{:.*}", CSS_DECIMALS, value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
