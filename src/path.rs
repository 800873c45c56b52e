//! Path data as emitted in an SVG `d` attribute.

#[cfg(feature = "serde")]
use std::convert::TryFrom;
use std::fmt;

use kurbo::{BezPath, PathEl, Point};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::Error;
use crate::sampler::CoordinateSampler;

/// One drawing instruction.
///
/// Every segment starts at the end point of the segment before it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub enum Segment {
    /// The start of the path.
    Move(Point),
    Line(Point),
    /// A quadratic Bézier: control point, then end point.
    Quadratic(Point, Point),
    /// A cubic Bézier: two control points, then end point.
    Cubic(Point, Point, Point),
}

/// The kinds of segment that can follow the initial move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Line,
    Quadratic,
    Cubic,
}

/// A single open or closed subpath.
///
/// The first segment is always a [`Segment::Move`], and it is the only move.
/// The `Display` impl produces SVG path data such as
/// `M10.5,20 Q1,2 3,4 Z`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", try_from = "RawPath")
)]
pub struct Path {
    segments: Vec<Segment>,
    is_closed: bool,
}

/// Deserialized path data, before it is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(crate = "serde_")]
struct RawPath {
    segments: Vec<Segment>,
    is_closed: bool,
}

impl Segment {
    /// The point that becomes the current point after this segment.
    pub fn end_point(&self) -> Point {
        match *self {
            Segment::Move(p) | Segment::Line(p) => p,
            Segment::Quadratic(_, p) => p,
            Segment::Cubic(_, _, p) => p,
        }
    }

    /// The number of coordinate pairs this segment carries.
    pub fn arity(&self) -> usize {
        match self {
            Segment::Move(_) | Segment::Line(_) => 1,
            Segment::Quadratic(..) => 2,
            Segment::Cubic(..) => 3,
        }
    }

    pub fn to_path_el(&self) -> PathEl {
        match *self {
            Segment::Move(p) => PathEl::MoveTo(p),
            Segment::Line(p) => PathEl::LineTo(p),
            Segment::Quadratic(p1, p2) => PathEl::QuadTo(p1, p2),
            Segment::Cubic(p1, p2, p3) => PathEl::CurveTo(p1, p2, p3),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Segment::Move(p) => write!(f, "M{},{}", p.x, p.y),
            Segment::Line(p) => write!(f, "L{},{}", p.x, p.y),
            Segment::Quadratic(p1, p2) => write!(f, "Q{},{} {},{}", p1.x, p1.y, p2.x, p2.y),
            Segment::Cubic(p1, p2, p3) => write!(
                f,
                "C{},{} {},{} {},{}",
                p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
            ),
        }
    }
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 3] = [
        SegmentKind::Line,
        SegmentKind::Quadratic,
        SegmentKind::Cubic,
    ];

    /// The number of points a segment of this kind draws.
    pub fn arity(self) -> usize {
        match self {
            SegmentKind::Line => 1,
            SegmentKind::Quadratic => 2,
            SegmentKind::Cubic => 3,
        }
    }

    /// Draw a segment of this kind. Control points are drawn first, the end
    /// point last.
    pub fn sample<R: Rng + ?Sized>(self, sampler: &CoordinateSampler, rng: &mut R) -> Segment {
        match self {
            SegmentKind::Line => Segment::Line(sampler.sample(rng)),
            SegmentKind::Quadratic => {
                let p1 = sampler.sample(rng);
                let p2 = sampler.sample(rng);
                Segment::Quadratic(p1, p2)
            }
            SegmentKind::Cubic => {
                let p1 = sampler.sample(rng);
                let p2 = sampler.sample(rng);
                let p3 = sampler.sample(rng);
                Segment::Cubic(p1, p2, p3)
            }
        }
    }
}

impl Distribution<SegmentKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SegmentKind {
        SegmentKind::ALL[rng.gen_range(0, SegmentKind::ALL.len())]
    }
}

impl Path {
    /// Start a new path at `start`.
    pub fn new(start: Point) -> Path {
        Path {
            segments: vec![Segment::Move(start)],
            is_closed: false,
        }
    }

    pub fn line_to(&mut self, p: Point) {
        self.push(Segment::Line(p));
    }

    pub fn quad_to(&mut self, p1: Point, p2: Point) {
        self.push(Segment::Quadratic(p1, p2));
    }

    pub fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) {
        self.push(Segment::Cubic(p1, p2, p3));
    }

    /// Append a drawing segment.
    ///
    /// # Panics
    ///
    /// Panics if `seg` is a move, or if the path is already closed.
    pub fn push(&mut self, seg: Segment) {
        assert!(
            !matches!(seg, Segment::Move(_)),
            "a path has exactly one move"
        );
        assert!(!self.is_closed, "cannot extend a closed path");
        self.segments.push(seg);
    }

    /// Mark the path as closed; a trailing `Z` is rendered.
    pub fn close(&mut self) {
        self.is_closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// All segments, starting with the move.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn start_point(&self) -> Point {
        self.segments[0].end_point()
    }

    /// The end point of the last segment.
    pub fn current_point(&self) -> Point {
        // segments is never empty.
        self.segments[self.segments.len() - 1].end_point()
    }

    /// Build a path from raw segments.
    ///
    /// The first segment must be a move, and no other segment may be one.
    pub fn from_segments(segments: Vec<Segment>, is_closed: bool) -> Result<Path, Error> {
        match segments.first() {
            None => return Err(Error::InvalidPath("no segments")),
            Some(Segment::Move(_)) => (),
            Some(_) => return Err(Error::InvalidPath("first segment is not a move")),
        }
        if segments[1..].iter().any(|s| matches!(s, Segment::Move(_))) {
            return Err(Error::InvalidPath("move after the first segment"));
        }
        Ok(Path {
            segments,
            is_closed,
        })
    }

    /// Convert to a kurbo path with the same elements.
    pub fn to_bez_path(&self) -> BezPath {
        let mut result = BezPath::new();
        for seg in &self.segments {
            result.push(seg.to_path_el());
        }
        if self.is_closed {
            result.close_path();
        }
        result
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", seg)?;
        }
        if self.is_closed {
            f.write_str(" Z")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = Error;

    fn try_from(raw: RawPath) -> Result<Path, Error> {
        Path::from_segments(raw.segments, raw.is_closed)
    }
}

impl From<&Path> for BezPath {
    fn from(path: &Path) -> BezPath {
        path.to_bez_path()
    }
}
