//! Easing curves
//!
//! Maps linear time `t` in [0, 1] onto eased progress. Cubic beziers are
//! solved numerically the same way CSS transition timing functions are.

/// An easing curve
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-out
    EaseOut,
    /// CSS `ease-in-out`
    EaseInOut,
    /// Cubic ease-out (`power3.out`)
    Power3Out,
    /// Exponential ease used by programmatic smooth scrolling
    ExpoOut,
    /// CSS style `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f64, f64, f64, f64),
}

/// Slow start, fast middle, slow landing. Carousel caption entrance.
pub const ARCHITECTURAL: Easing = Easing::CubicBezier(0.76, 0.0, 0.24, 1.0);

/// Fast start with a long soft landing. Navbar, content and watermark.
pub const SOFT_LANDING: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

/// Accelerating exit for caption lines leaving the screen.
pub const EXIT: Easing = Easing::CubicBezier(0.32, 0.0, 0.67, 0.0);

impl Easing {
    /// Apply the curve. Input is clamped to [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => Easing::CubicBezier(0.42, 0.0, 0.58, 1.0).apply(t),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(3),
            Easing::ExpoOut => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }
}

/// One axis of a cubic bezier anchored at 0 and 1
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate equals `x`
fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    // Newton-Raphson converges fast for well-behaved curves
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    // Bisection fallback for flat regions
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    while hi - lo > EPSILON {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}
