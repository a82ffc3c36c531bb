//! Uniform random sources
//!
//! The automaton consumes uniform draws in `[0, 1)`. Any generator satisfies that
//! contract; nothing here promises seeded replay.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Provider of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapter from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the inner generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the thread-local generator
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Source that returns the same draw forever
///
/// `ConstantSource::new(0.0)` makes every probabilistic event with `p > 0` fire;
/// [`ConstantSource::never`] makes every event with `p < 1` fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource {
    value: f64,
}

impl ConstantSource {
    /// # Panics
    ///
    /// Panics if `value` is not in `[0, 1)`.
    pub fn new(value: f64) -> Self {
        assert!(
            (0.0..1.0).contains(&value),
            "Draw must be in [0, 1), got {value}"
        );
        Self { value }
    }

    /// Largest draw below 1.0
    pub fn never() -> Self {
        Self::new(1.0 - f64::EPSILON)
    }
}

impl RandomSource for ConstantSource {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.value
    }
}

/// Source that replays a fixed list of draws cyclically
///
/// Tracks how many draws were taken so callers can check consumption.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    draws: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `values` is empty or contains a value outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "Sequence must contain at least one draw");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "Draws must be in [0, 1)"
        );
        Self { values, draws: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.draws % self.values.len()];
        self.draws += 1;
        value
    }
}
