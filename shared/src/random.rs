use rand::Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        RngSource(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_wraps() {
        let mut rng = SequenceRandom::new(vec![0.25, 0.5]);
        assert_eq!(rng.next_unit(), 0.25);
        assert_eq!(rng.next_unit(), 0.5);
        assert_eq!(rng.next_unit(), 0.25);
    }

    #[test]
    fn test_next_index_stays_in_range() {
        let mut rng = SequenceRandom::new(vec![0.0, 0.999_999_9]);
        assert_eq!(rng.next_index(3), 0);
        assert_eq!(rng.next_index(3), 2);
    }

    #[test]
    fn test_rng_source_draws_unit_interval() {
        let mut rng = RngSource::thread();
        for _ in 0..100 {
            let draw = rng.next_unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }
}
