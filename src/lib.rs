//! Random vector paths for test data.
//!
//! This crate draws random points, chains them into SVG path data made of
//! line, quadratic and cubic segments, and writes the results either as a
//! plain listing (one `d` string per line) or as a minimal SVG document.
//!
//! All randomness comes from a generator supplied by the caller, so a seeded
//! [`rand::rngs::StdRng`] makes every operation reproducible.
//!
//! ```
//! use rand::SeedableRng;
//! use fakepath::PathComposer;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let path = PathComposer::new().compose(3, &mut rng);
//! assert!(path.to_string().starts_with('M'));
//! ```

mod batch;
mod composer;
mod document;
mod error;
mod path;
mod sampler;
mod util;

pub use batch::{write_listing, write_listing_to, Batch};
pub use composer::{PathComposer, CLOSE_PROBABILITY};
pub use document::{write_svg, Document, StrokeColor};
pub use error::{Error, Result};
pub use path::{Path, Segment, SegmentKind};
pub use sampler::{Bounds, CoordinateSampler, Interval};
