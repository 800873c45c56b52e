//! Chaining random segments into paths.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::path::{Path, SegmentKind};
use crate::sampler::CoordinateSampler;

/// The probability that a composed path is closed, when closing is allowed.
pub const CLOSE_PROBABILITY: f64 = 0.3;

/// The most segments of one kind emitted by a single round.
const MAX_REPEAT: usize = 3;

/// Generates random paths.
///
/// A path starts with a random move, followed by a number of rounds. Each
/// round picks a [`SegmentKind`] and a repeat count from 1 to 3, and emits
/// that many segments of that kind. The number of segments in the result
/// is therefore between `rounds` and `3 * rounds`.
#[derive(Copy, Clone, Debug)]
pub struct PathComposer {
    sampler: CoordinateSampler,
    allow_close: bool,
}

impl PathComposer {
    /// A composer drawing from the default `[0, 500] × [0, 500]` bounds
    /// that may close paths.
    pub fn new() -> PathComposer {
        PathComposer {
            sampler: CoordinateSampler::default(),
            allow_close: true,
        }
    }

    pub fn with_sampler(mut self, sampler: CoordinateSampler) -> PathComposer {
        self.sampler = sampler;
        self
    }

    /// Whether composed paths may end with a close.
    pub fn allow_close(mut self, allow_close: bool) -> PathComposer {
        self.allow_close = allow_close;
        self
    }

    pub fn sampler(&self) -> &CoordinateSampler {
        &self.sampler
    }

    /// Compose a path, drawing everything from `rng`.
    ///
    /// Draw order: the start point, then for each round the segment kind,
    /// the repeat count and the segment points, then (only when closing is
    /// allowed) one draw deciding whether to close.
    pub fn compose<R: Rng + ?Sized>(&self, rounds: usize, rng: &mut R) -> Path {
        let mut path = Path::new(self.sampler.sample(rng));
        for round in 0..rounds {
            let kind: SegmentKind = rng.gen();
            let repeat = rng.gen_range(1, MAX_REPEAT + 1);
            trace!("round {}: {} x {:?}", round, repeat, kind);
            for _ in 0..repeat {
                path.push(kind.sample(&self.sampler, rng));
            }
        }
        if self.allow_close && rng.gen_bool(CLOSE_PROBABILITY) {
            path.close();
        }
        debug!(
            "composed path: {} rounds, {} segments, closed: {}",
            rounds,
            path.segments().len() - 1,
            path.is_closed()
        );
        path
    }

    /// Compose a path from its own generator seeded with `seed`, or from
    /// `rng` when there is no seed.
    ///
    /// A seeded composition leaves `rng` untouched, and always produces the
    /// same path for the same seed and settings.
    pub fn compose_with_seed<R: Rng + ?Sized>(
        &self,
        rounds: usize,
        seed: Option<u64>,
        rng: &mut R,
    ) -> Path {
        match seed {
            Some(seed) => self.compose_seeded(rounds, seed),
            None => self.compose(rounds, rng),
        }
    }

    pub fn compose_seeded(&self, rounds: usize, seed: u64) -> Path {
        let mut rng = StdRng::seed_from_u64(seed);
        self.compose(rounds, &mut rng)
    }
}

impl Default for PathComposer {
    fn default() -> PathComposer {
        PathComposer::new()
    }
}
