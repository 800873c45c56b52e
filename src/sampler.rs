//! Uniform sampling of points inside a rectangle.

use kurbo::Point;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::util;

/// A closed interval `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

/// The region coordinates are drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Bounds {
    pub x: Interval,
    pub y: Interval,
}

/// Draws random points within [`Bounds`].
///
/// Each axis is sampled independently and uniformly, then rounded to two
/// decimal places. Points never leave the bounds; if an interval end is not
/// a multiple of 0.01, a point rounded past it is set to the end itself.
#[derive(Copy, Clone, Debug)]
pub struct CoordinateSampler {
    bounds: Bounds,
    x: Uniform<f64>,
    y: Uniform<f64>,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Interval {
        Interval { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Round `v` to two decimals, keeping the result inside the interval.
    ///
    /// Ends that are not multiples of 0.01 are returned as they are when
    /// rounding would cross them.
    fn round_within(&self, v: f64) -> f64 {
        util::round2(v).max(self.min).min(self.max)
    }

    fn uniform(&self) -> Uniform<f64> {
        Uniform::new_inclusive(self.min, self.max)
    }
}

impl Bounds {
    pub const fn new(x: Interval, y: Interval) -> Bounds {
        Bounds { x, y }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds::new(Interval::new(0.0, 500.0), Interval::new(0.0, 500.0))
    }
}

impl CoordinateSampler {
    /// Create a sampler for the given bounds.
    ///
    /// # Panics
    ///
    /// Panics if either interval has `min > max` or a non-finite end.
    pub fn new(bounds: Bounds) -> CoordinateSampler {
        CoordinateSampler {
            bounds,
            x: bounds.x.uniform(),
            y: bounds.y.uniform(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Draw one point. The x coordinate is drawn before the y coordinate.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x = self.x.sample(rng);
        let y = self.y.sample(rng);
        Point::new(self.bounds.x.round_within(x), self.bounds.y.round_within(y))
    }
}

impl Default for CoordinateSampler {
    fn default() -> CoordinateSampler {
        CoordinateSampler::new(Bounds::default())
    }
}

impl Distribution<Point> for CoordinateSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        CoordinateSampler::sample(self, rng)
    }
}
