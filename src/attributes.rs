//! # Placeholder Attribute Sources
//!
//! Generators color their vertices with values drawn from an
//! [`AttributeSource`]. Colors are cosmetic: positions, normals, texture
//! coordinates and indices never depend on the source.
//!
//! The `generate_*` functions draw from a per-thread clock-seeded
//! [`RandomSource`]; the `generate_*_with` variants take any source, which
//! makes output fully reproducible when the source is seeded.

use std::cell::RefCell;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies uniformly distributed values in `[0, 1)`.
pub trait AttributeSource {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Three consecutive values as an RGB triple.
    fn next_color(&mut self) -> [f32; 3] {
        [self.next_unit(), self.next_unit(), self.next_unit()]
    }
}

impl<S: AttributeSource + ?Sized> AttributeSource for &mut S {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Pseudo-random source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Deterministic source: equal seeds give equal sequences.
    pub fn seeded(seed: u64) -> Self {
        log::trace!("seeding attribute source with {seed:#018x}");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the current wall-clock reading.
    pub fn from_clock() -> Self {
        Self::seeded(clock_seed())
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl AttributeSource for RandomSource {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Source that always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource(pub f32);

impl AttributeSource for ConstantSource {
    fn next_unit(&mut self) -> f32 {
        self.0
    }
}

/// Low 64 bits of the nanoseconds elapsed since the epoch.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

thread_local! {
    static SHARED: RefCell<RandomSource> = RefCell::new(RandomSource::from_clock());
}

/// Runs `f` with this thread's shared source.
///
/// Each thread owns its own source, so generators may be called from several
/// threads at once without any locking.
pub fn with_shared_source<T>(f: impl FnOnce(&mut RandomSource) -> T) -> T {
    SHARED.with(|source| f(&mut source.borrow_mut()))
}

/// Replaces this thread's shared source with a seeded one.
pub fn reseed_shared(seed: u64) {
    SHARED.with(|source| *source.borrow_mut() = RandomSource::seeded(seed));
}
