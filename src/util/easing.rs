//! Easing functions for tween interpolation.
//!
//! Curves map elapsed-time fraction to progress fraction. Names follow the
//! conventional `powerN.in/out/inOut` vocabulary so options files and web
//! callers can refer to them as strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-in-out: slow start, fast middle, slow end.
    CubicInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Curve used for camera focus moves.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }

    /// Canonical name, or `None` for parameterized curves.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        match self {
            EasingFunction::Linear => Some("none"),
            EasingFunction::QuadraticIn => Some("power1.in"),
            EasingFunction::QuadraticOut => Some("power1.out"),
            EasingFunction::CubicInOut => Some("power3.inOut"),
            EasingFunction::CubicHermite { .. } => None,
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Error returned when an easing name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEasing(pub String);

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown easing: {}", self.0)
    }
}

impl std::error::Error for UnknownEasing {}

impl FromStr for EasingFunction {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "linear" => Ok(Self::Linear),
            "power1.in" => Ok(Self::QuadraticIn),
            "power1.out" => Ok(Self::QuadraticOut),
            "power3.inOut" | "cubic.inOut" => Ok(Self::CubicInOut),
            _ => parse_hermite(s).ok_or_else(|| UnknownEasing(s.to_owned())),
        }
    }
}

/// Parses `hermite(c1,c2)`.
fn parse_hermite(s: &str) -> Option<EasingFunction> {
    let args = s.strip_prefix("hermite(")?.strip_suffix(')')?;
    let (c1, c2) = args.split_once(',')?;
    Some(EasingFunction::CubicHermite {
        c1: c1.trim().parse().ok()?,
        c2: c2.trim().parse().ok()?,
    })
}

impl TryFrom<String> for EasingFunction {
    type Error = UnknownEasing;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EasingFunction> for String {
    fn from(easing: EasingFunction) -> Self {
        match easing {
            EasingFunction::CubicHermite { c1, c2 } => {
                format!("hermite({c1},{c2})")
            }
            named => named.name().unwrap_or("none").to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_in_out_shape() {
        let ease = EasingFunction::CubicInOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(0.5), 0.5);
        assert_eq!(ease.evaluate(1.0), 1.0);
        // Slow start, slow end
        assert!(ease.evaluate(0.1) < 0.1);
        assert!(ease.evaluate(0.9) > 0.9);
        // Symmetric around the midpoint
        let a = ease.evaluate(0.25);
        let b = ease.evaluate(0.75);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_is_monotonic() {
        let ease = EasingFunction::CubicInOut;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.evaluate(i as f32 / 100.0);
            assert!(v >= prev, "non-monotonic at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_input_clamping() {
        let ease = EasingFunction::CubicInOut;
        assert_eq!(ease.evaluate(-0.5), 0.0);
        assert_eq!(ease.evaluate(1.5), 1.0);
        assert_eq!(ease.evaluate(f32::NAN), 0.0);

        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(-0.5), 0.0);
        assert!((hermite.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75);
    }

    #[test]
    fn parses_named_curves() {
        assert_eq!(
            "power3.inOut".parse::<EasingFunction>(),
            Ok(EasingFunction::CubicInOut)
        );
        assert_eq!(
            "none".parse::<EasingFunction>(),
            Ok(EasingFunction::Linear)
        );
        assert_eq!(
            "hermite(0.33, 1)".parse::<EasingFunction>(),
            Ok(EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 })
        );
        assert!("elastic.out".parse::<EasingFunction>().is_err());
    }

    #[test]
    fn serializes_by_name() {
        let json = serde_json::to_string(&EasingFunction::CubicInOut).unwrap();
        assert_eq!(json, "\"power3.inOut\"");
        let back: EasingFunction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EasingFunction::CubicInOut);
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
    }
}
