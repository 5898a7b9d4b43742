//! Seeded pseudo-random stream for procedural levels
//!
//! A plain 32-bit linear-congruential generator. Levels are keyed by
//! `(level index, difficulty)` alone, so the same seed must yield the same
//! sequence forever - the recurrence and the output mapping are part of the
//! level format and must not change.

/// Deterministic `[0, 1)` value stream.
///
/// Two streams created with the same seed produce identical sequences
/// independently; there is no hidden global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcgStream {
    state: u32,
}

impl LcgStream {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream and return the next value in `[0, 1)`.
    pub fn next(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.state as f64 / 4_294_967_296.0) as f32
    }

    /// Roll against a probability threshold.
    pub fn chance(&mut self, p: f32) -> bool {
        self.next() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_first_draw() {
        // Seed for level 0 on hard: 1000 + 0*7 + 9999. Pinned reference value;
        // if this moves, every generated level moves with it.
        let mut stream = LcgStream::new(10_999);
        let first = stream.next();
        assert_eq!(first, (2_142_145_514.0_f64 / 4_294_967_296.0) as f32);
        assert!((first - 0.498_757_12).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = LcgStream::new(424_242);
        let mut b = LcgStream::new(424_242);
        for _ in 0..256 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_output_range() {
        let mut stream = LcgStream::new(1);
        for _ in 0..10_000 {
            let v = stream.next();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_streams_are_independent() {
        let mut a = LcgStream::new(7);
        let expected: Vec<f32> = {
            let mut s = LcgStream::new(7);
            (0..8).map(|_| s.next()).collect()
        };
        // Interleaving an unrelated stream must not disturb `a`.
        let mut noise = LcgStream::new(99);
        for want in expected {
            let _ = noise.next();
            assert_eq!(a.next(), want);
        }
    }
}
