//! Breakpoint mapping
//!
//! An ordered list of `(input, output)` pairs defining a piecewise-linear
//! function. Inputs between neighbouring breakpoints interpolate linearly;
//! inputs outside the first/last breakpoint clamp to the boundary output.
//! Nothing is ever extrapolated.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors building a breakpoint mapping
#[derive(Debug, Error, PartialEq)]
pub enum KeyframeError {
    #[error("a mapping needs at least one breakpoint")]
    Empty,

    #[error("breakpoint inputs must be ascending (got {previous} then {next})")]
    Unordered { previous: f64, next: f64 },

    #[error("breakpoint outputs mix units ({first} and {other})")]
    MixedUnits { first: Unit, other: Unit },

    #[error("could not parse length '{0}'")]
    InvalidLength(String),

    #[error("{inputs} breakpoint inputs but {outputs} outputs")]
    LengthMismatch { inputs: usize, outputs: usize },
}

/// Unit of a [`Length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Bare number (opacity, scale)
    Scalar,
    /// Percentage of the element's own size
    Percent,
    /// CSS pixels
    Px,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Scalar => write!(f, "scalar"),
            Unit::Percent => write!(f, "%"),
            Unit::Px => write!(f, "px"),
        }
    }
}

/// A number with a unit, e.g. `-10%`, `50px` or `1.1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const fn scalar(value: f64) -> Self {
        Self { value, unit: Unit::Scalar }
    }

    pub const fn percent(value: f64) -> Self {
        Self { value, unit: Unit::Percent }
    }

    pub const fn px(value: f64) -> Self {
        Self { value, unit: Unit::Px }
    }

    /// Resolve to terminal cells.
    ///
    /// Percentages are relative to `reference` cells, pixels are divided by
    /// `px_per_cell`, scalars pass through untouched.
    pub fn to_cells(self, reference: f64, px_per_cell: f64) -> f64 {
        match self.unit {
            Unit::Scalar => self.value,
            Unit::Percent => self.value / 100.0 * reference,
            Unit::Px if px_per_cell > 0.0 => self.value / px_per_cell,
            Unit::Px => 0.0,
        }
    }
}

/// Number with an optional `%` or `px` suffix
static LENGTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([-+]?(?:\d+\.?\d*|\.\d+))\s*(%|px)?\s*$").unwrap()
});

impl FromStr for Length {
    type Err = KeyframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = LENGTH_REGEX
            .captures(s)
            .ok_or_else(|| KeyframeError::InvalidLength(s.to_string()))?;
        let value: f64 = caps[1]
            .parse()
            .map_err(|_| KeyframeError::InvalidLength(s.to_string()))?;
        let unit = match caps.get(2).map(|m| m.as_str()) {
            Some("%") => Unit::Percent,
            Some("px") => Unit::Px,
            _ => Unit::Scalar,
        };
        Ok(Self { value, unit })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Normalise -0 so midpoints print as "0%"
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        match self.unit {
            Unit::Scalar => write!(f, "{}", value),
            Unit::Percent => write!(f, "{}%", value),
            Unit::Px => write!(f, "{}px", value),
        }
    }
}

/// Piecewise-linear mapping from progress to a [`Length`]
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    points: Vec<(f64, Length)>,
}

impl Keyframes {
    /// Build a mapping, validating order and units
    pub fn new(points: Vec<(f64, Length)>) -> Result<Self, KeyframeError> {
        let first = points.first().ok_or(KeyframeError::Empty)?;
        let unit = first.1.unit;

        for pair in points.windows(2) {
            let (previous, next) = (pair[0].0, pair[1].0);
            if next.is_nan() || previous.is_nan() || next < previous {
                return Err(KeyframeError::Unordered { previous, next });
            }
        }
        if let Some((_, other)) = points.iter().find(|(_, l)| l.unit != unit) {
            return Err(KeyframeError::MixedUnits {
                first: unit,
                other: other.unit,
            });
        }

        Ok(Self { points })
    }

    /// Build a mapping from textual outputs such as `["-10%", "10%"]`
    pub fn parse(inputs: &[f64], outputs: &[&str]) -> Result<Self, KeyframeError> {
        if inputs.len() != outputs.len() {
            return Err(KeyframeError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        let points = inputs
            .iter()
            .zip(outputs)
            .map(|(input, output)| Ok((*input, output.parse::<Length>()?)))
            .collect::<Result<Vec<_>, KeyframeError>>()?;
        Self::new(points)
    }

    /// Same output everywhere
    pub fn constant(value: Length) -> Self {
        Self {
            points: vec![(0.0, value)],
        }
    }

    pub fn unit(&self) -> Unit {
        self.points[0].1.unit
    }

    /// Evaluate the mapping at `input`
    pub fn sample(&self, input: f64) -> Length {
        let unit = self.unit();
        let (first_in, first_out) = self.points[0];
        let (last_in, last_out) = self.points[self.points.len() - 1];

        if input.is_nan() || input <= first_in {
            return first_out;
        }
        if input >= last_in {
            return last_out;
        }

        for pair in self.points.windows(2) {
            let (in_a, out_a) = pair[0];
            let (in_b, out_b) = pair[1];
            if input >= in_a && input <= in_b {
                let span = in_b - in_a;
                if span <= f64::EPSILON {
                    return out_b;
                }
                let t = (input - in_a) / span;
                return Length {
                    value: out_a.value + (out_b.value - out_a.value) * t,
                    unit,
                };
            }
        }
        last_out
    }

    /// Evaluate and resolve to terminal cells in one step
    pub fn sample_cells(&self, input: f64, reference: f64, px_per_cell: f64) -> f64 {
        self.sample(input).to_cells(reference, px_per_cell)
    }
}
