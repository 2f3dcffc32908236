//! Random source seam.
//!
//! The builder only needs two operations: a uniform index into a non-empty
//! collection and a uniform float in `[0, 1)`. Production code wraps a
//! `rand` generator; tests substitute a scripted sequence.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of the uniform draws the builder consumes.
///
/// Implementations used for real passphrases must be cryptographically
/// secure. The core does not check this.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is always non-zero.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Adapter from any [`rand::Rng`] to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// The thread-local CSPRNG, seeded from the operating system.
    pub fn system() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use scripted::{Draw, ScriptedSource};

#[cfg(any(test, feature = "test-support"))]
mod scripted {
    use std::collections::VecDeque;

    use super::RandomSource;

    /// One pre-recorded draw.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Draw {
        /// Answer to `choose_index`
        Index(usize),
        /// Answer to `next_unit`
        Unit(f64),
    }

    /// Replays a fixed sequence of draws.
    ///
    /// Panics when the caller asks for a different kind of draw than the next
    /// one scripted, for an index outside the requested range, or when the
    /// script runs out.
    #[derive(Debug, Default, Clone)]
    pub struct ScriptedSource {
        draws: VecDeque<Draw>,
        taken: usize,
    }

    impl ScriptedSource {
        pub fn new(draws: impl IntoIterator<Item = Draw>) -> Self {
            Self {
                draws: draws.into_iter().collect(),
                taken: 0,
            }
        }

        /// A source that panics on the first draw.
        pub fn empty() -> Self {
            Self::default()
        }

        /// Draws not yet consumed.
        pub fn remaining(&self) -> usize {
            self.draws.len()
        }

        /// Draws consumed so far.
        pub fn taken(&self) -> usize {
            self.taken
        }

        fn next(&mut self) -> Draw {
            let draw = self
                .draws
                .pop_front()
                .unwrap_or_else(|| panic!("script exhausted after {} draws", self.taken));
            self.taken += 1;
            draw
        }
    }

    impl RandomSource for ScriptedSource {
        fn choose_index(&mut self, len: usize) -> usize {
            match self.next() {
                Draw::Index(index) if index < len => index,
                Draw::Index(index) => {
                    panic!("draw {}: index {} out of range 0..{}", self.taken, index, len)
                }
                other => panic!("draw {}: expected index, scripted {:?}", self.taken, other),
            }
        }

        fn next_unit(&mut self) -> f64 {
            match self.next() {
                Draw::Unit(value) => value,
                other => panic!("draw {}: expected unit, scripted {:?}", self.taken, other),
            }
        }
    }
}
