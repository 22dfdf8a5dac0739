use crate::core::base::*;
use crate::core::rng::RNG;

/// Source of uniform random numbers in [0, 1) consumed while sampling a
/// scattering event.
pub trait SampleGenerator {
    fn get_1d(&mut self) -> Float;

    fn get_2d(&mut self) -> Point2f {
        let u = self.get_1d();
        let v = self.get_1d();
        return Point2f::new(u, v);
    }

    /// Returns true with probability `p`.
    fn next_boolean(&mut self, p: Float) -> bool {
        return self.get_1d() < p;
    }
}

impl SampleGenerator for RNG {
    #[inline]
    fn get_1d(&mut self) -> Float {
        return self.uniform_float();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_boolean_bounds() {
        let mut rng = RNG::new_sequence(3);
        for _ in 0..1000 {
            assert!(!rng.next_boolean(0.0));
            assert!(rng.next_boolean(1.0));
        }
    }

    #[test]
    fn test_next_boolean_rate() {
        let mut rng = RNG::new_sequence(5);
        let n = 100000;
        let hits = (0..n).filter(|_| rng.next_boolean(0.25)).count();
        let rate = hits as Float / n as Float;
        assert!((rate - 0.25).abs() < 0.01, "rate: {}", rate);
    }

    #[test]
    fn test_get_2d_order() {
        let mut a = RNG::new_sequence(9);
        let mut b = RNG::new_sequence(9);
        let p = a.get_2d();
        assert_eq!(p[0], b.uniform_float());
        assert_eq!(p[1], b.uniform_float());
    }
}
