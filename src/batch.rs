//! Batches of independently seeded paths, and plain path listings.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use log::info;
use rand::Rng;

use crate::composer::PathComposer;
use crate::error::Result;
use crate::path::Path;
use crate::util;

/// A batch of paths where path `i` is composed from seed `i`.
///
/// The number of rounds for each path is drawn from the generator passed to
/// [`Batch::generate`], so the batch as a whole is only reproducible when
/// that generator is seeded too.
#[derive(Clone, Debug)]
pub struct Batch {
    count: usize,
    rounds: RangeInclusive<usize>,
    composer: PathComposer,
}

impl Batch {
    pub const DEFAULT_COUNT: usize = 200;

    pub fn new() -> Batch {
        Batch {
            count: Batch::DEFAULT_COUNT,
            rounds: 2..=5,
            composer: PathComposer::new(),
        }
    }

    pub fn count(mut self, count: usize) -> Batch {
        self.count = count;
        self
    }

    /// The inclusive range the per-path rounds count is drawn from.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    pub fn rounds(mut self, rounds: RangeInclusive<usize>) -> Batch {
        assert!(!rounds.is_empty(), "empty rounds range {:?}", rounds);
        self.rounds = rounds;
        self
    }

    pub fn composer(mut self, composer: PathComposer) -> Batch {
        self.composer = composer;
        self
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Path> {
        (0..self.count)
            .map(|i| {
                let rounds = rng.gen_range(*self.rounds.start(), *self.rounds.end() + 1);
                self.composer.compose_seeded(rounds, i as u64)
            })
            .collect()
    }
}

impl Default for Batch {
    fn default() -> Batch {
        Batch::new()
    }
}

/// Write one path per line.
pub fn write_listing_to<W: Write>(paths: &[Path], mut writer: W) -> io::Result<()> {
    for path in paths {
        writeln!(writer, "{}", path)?;
    }
    Ok(())
}

/// Write one path per line to `destination`, replacing any existing file.
pub fn write_listing(paths: &[Path], destination: impl AsRef<std::path::Path>) -> Result<()> {
    let destination = destination.as_ref();
    util::write_file(destination, |w| write_listing_to(paths, w))?;
    info!("wrote {} paths to {}", paths.len(), destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_batch() {
        let mut rng = StdRng::seed_from_u64(0);
        let paths = Batch::new().generate(&mut rng);
        assert_eq!(paths.len(), 200);
        for path in &paths {
            // 2..=5 rounds of 1..=3 segments, plus the move.
            let n = path.segments().len();
            assert!(n >= 3 && n <= 16, "{} segments", n);
        }
    }

    #[test]
    fn path_seeds_follow_index() {
        let composer = PathComposer::new();
        let mut rng = StdRng::seed_from_u64(1);
        let paths = Batch::new().count(10).rounds(3..=3).generate(&mut rng);
        for (i, path) in paths.iter().enumerate() {
            assert_eq!(*path, composer.compose_seeded(3, i as u64));
        }
    }

    #[test]
    fn seeded_outer_rng_reproduces_batch() {
        let batch = Batch::new().count(20);
        let a = batch.generate(&mut StdRng::seed_from_u64(77));
        let b = batch.generate(&mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn listing_has_one_line_per_path() {
        let mut rng = StdRng::seed_from_u64(2);
        let paths = Batch::new().count(12).generate(&mut rng);
        let dest = std::env::temp_dir()
            .join(format!("fakepath-{}-listing.txt", std::process::id()));
        write_listing(&paths, &dest).unwrap();
        let text = std::fs::read_to_string(&dest).unwrap();
        std::fs::remove_file(&dest).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), paths.len());
        for (line, path) in lines.iter().zip(&paths) {
            assert_eq!(*line, path.to_string());
            assert!(!line.contains('<'));
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn empty_listing() {
        let mut buf = Vec::new();
        write_listing_to(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
