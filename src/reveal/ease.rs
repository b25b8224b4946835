/// Timing curve applied to `index / count` when spacing reveal offsets.
///
/// Every variant is monotonic on `[0, 1]`, so eased offsets stay ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Evenly spaced offsets, `duration * index / count`.
    #[default]
    Linear,
    /// Slow start, quadratic.
    InQuad,
    /// Slow finish, quadratic.
    OutQuad,
    /// Slow start and finish, quadratic.
    InOutQuad,
    /// Slow start, cubic.
    InCubic,
    /// Slow finish, cubic.
    OutCubic,
    /// Slow start and finish, cubic.
    InOutCubic,
}

impl Ease {
    /// Maps progress `t` (clamped to `[0, 1]`) onto the curve; `apply(0) == 0`, `apply(1) == 1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// The same curve as a JavaScript expression over a variable `t`.
    pub fn js_expr(self) -> &'static str {
        match self {
            Self::Linear => "t",
            Self::InQuad => "t * t",
            Self::OutQuad => "1 - (1 - t) * (1 - t)",
            Self::InOutQuad => "t < 0.5 ? 2 * t * t : 1 - Math.pow(-2 * t + 2, 2) / 2",
            Self::InCubic => "t * t * t",
            Self::OutCubic => "1 - Math.pow(1 - t, 3)",
            Self::InOutCubic => "t < 0.5 ? 4 * t * t * t : 1 - Math.pow(-2 * t + 2, 3) / 2",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/ease.rs"]
mod tests;
