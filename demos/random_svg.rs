//! A simple program that composes a handful of random paths.
//!
//! This outputs an SVG document to stdout; pass a seed as the first argument
//! to get the same document every time.

use kurbo::Size;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fakepath::{Batch, Document};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);
    const N: usize = 10;
    let paths = Batch::new().count(N).generate(&mut rng);
    for path in &paths {
        eprintln!("{} segments, closed: {}", path.segments().len() - 1, path.is_closed());
    }
    let doc = Document::with_random_strokes(&paths, Size::new(500.0, 500.0), &mut rng);
    print!("{}", doc.to_svg());
}
