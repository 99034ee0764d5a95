use std::str::FromStr;

use crate::foundation::error::{ScrollweaveError, ScrollweaveResult};

/// Easing curve applied to normalized tween progress.
///
/// Names follow the web animation convention: `power1` is quadratic, `power2` cubic, `power3`
/// quartic and `power4` quintic. Parsing accepts those names (`"power4.inOut"`, `"expo.out"`,
/// `"back.out(2)"`, `"none"`) as well as the variant names.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// No easing.
    #[default]
    Linear,
    /// Quadratic in.
    InQuad,
    /// Quadratic out.
    OutQuad,
    /// Quadratic in-out.
    InOutQuad,
    /// Cubic in.
    InCubic,
    /// Cubic out.
    OutCubic,
    /// Cubic in-out.
    InOutCubic,
    /// Quartic in.
    InQuart,
    /// Quartic out.
    OutQuart,
    /// Quartic in-out.
    InOutQuart,
    /// Quintic in.
    InQuint,
    /// Quintic out.
    OutQuint,
    /// Quintic in-out.
    InOutQuint,
    /// Exponential in.
    InExpo,
    /// Exponential out.
    OutExpo,
    /// Exponential in-out.
    InOutExpo,
    /// Overshooting out curve; `overshoot` is the back amount (1.70158 by default).
    OutBack {
        /// Back amount.
        overshoot: f64,
    },
}

impl Ease {
    /// Map `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => in_out(t, 2),
            Self::InCubic => t.powi(3),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => in_out(t, 3),
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => in_out(t, 4),
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => in_out(t, 5),
            Self::InExpo => {
                if t <= 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::InOutExpo => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::OutBack { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }

    /// Canonical name, accepted back by [`Ease::from_str`].
    pub fn name(self) -> String {
        match self {
            Self::Linear => "none".to_string(),
            Self::InQuad => "power1.in".to_string(),
            Self::OutQuad => "power1.out".to_string(),
            Self::InOutQuad => "power1.inOut".to_string(),
            Self::InCubic => "power2.in".to_string(),
            Self::OutCubic => "power2.out".to_string(),
            Self::InOutCubic => "power2.inOut".to_string(),
            Self::InQuart => "power3.in".to_string(),
            Self::OutQuart => "power3.out".to_string(),
            Self::InOutQuart => "power3.inOut".to_string(),
            Self::InQuint => "power4.in".to_string(),
            Self::OutQuint => "power4.out".to_string(),
            Self::InOutQuint => "power4.inOut".to_string(),
            Self::InExpo => "expo.in".to_string(),
            Self::OutExpo => "expo.out".to_string(),
            Self::InOutExpo => "expo.inOut".to_string(),
            Self::OutBack { overshoot } => format!("back.out({overshoot})"),
        }
    }
}

fn in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}

const DEFAULT_BACK_OVERSHOOT: f64 = 1.70158;

impl FromStr for Ease {
    type Err = ScrollweaveError;

    fn from_str(s: &str) -> ScrollweaveResult<Self> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ScrollweaveError::animation("ease name must be non-empty"));
        }

        let (family, dir) = match raw.split_once('.') {
            Some((f, d)) => (f.to_ascii_lowercase(), d.to_string()),
            None => (raw.to_ascii_lowercase(), "out".to_string()),
        };

        if family == "back" {
            let (dir, overshoot) = match dir.split_once('(') {
                Some((d, rest)) => {
                    let amount = rest.trim_end_matches(')').trim();
                    let v: f64 = amount.parse().map_err(|_| {
                        ScrollweaveError::animation(format!("invalid back overshoot '{amount}'"))
                    })?;
                    if !v.is_finite() {
                        return Err(ScrollweaveError::animation(
                            "back overshoot must be finite",
                        ));
                    }
                    (d.to_string(), v)
                }
                None => (dir, DEFAULT_BACK_OVERSHOOT),
            };
            if dir != "out" {
                return Err(ScrollweaveError::animation(format!(
                    "unsupported back ease direction '{dir}'"
                )));
            }
            return Ok(Self::OutBack { overshoot });
        }

        let ease = match (family.as_str(), dir.as_str()) {
            ("none" | "linear", _) => Self::Linear,
            ("power0", _) => Self::Linear,
            ("power1" | "quad", "in") => Self::InQuad,
            ("power1" | "quad", "out") => Self::OutQuad,
            ("power1" | "quad", "inOut") => Self::InOutQuad,
            ("power2" | "cubic", "in") => Self::InCubic,
            ("power2" | "cubic", "out") => Self::OutCubic,
            ("power2" | "cubic", "inOut") => Self::InOutCubic,
            ("power3" | "quart", "in") => Self::InQuart,
            ("power3" | "quart", "out") => Self::OutQuart,
            ("power3" | "quart", "inOut") => Self::InOutQuart,
            ("power4" | "quint", "in") => Self::InQuint,
            ("power4" | "quint", "out") => Self::OutQuint,
            ("power4" | "quint", "inOut") => Self::InOutQuint,
            ("expo", "in") => Self::InExpo,
            ("expo", "out") => Self::OutExpo,
            ("expo", "inOut") => Self::InOutExpo,
            _ => match raw {
                "InQuad" => Self::InQuad,
                "OutQuad" => Self::OutQuad,
                "InOutQuad" => Self::InOutQuad,
                "InCubic" => Self::InCubic,
                "OutCubic" => Self::OutCubic,
                "InOutCubic" => Self::InOutCubic,
                "InQuart" => Self::InQuart,
                "OutQuart" => Self::OutQuart,
                "InOutQuart" => Self::InOutQuart,
                "InQuint" => Self::InQuint,
                "OutQuint" => Self::OutQuint,
                "InOutQuint" => Self::InOutQuint,
                "InExpo" => Self::InExpo,
                "OutExpo" => Self::OutExpo,
                "InOutExpo" => Self::InOutExpo,
                "Linear" => Self::Linear,
                other => {
                    return Err(ScrollweaveError::animation(format!(
                        "unknown ease '{other}'"
                    )));
                }
            },
        };
        Ok(ease)
    }
}

impl TryFrom<String> for Ease {
    type Error = ScrollweaveError;

    fn try_from(value: String) -> ScrollweaveResult<Self> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.name()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
