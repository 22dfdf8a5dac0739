use crate::core::base::*;
use std::ops;

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RGBSpectrum {
    c: [Float; 3],
}

impl RGBSpectrum {
    pub const N_SAMPLES: usize = 3;

    #[inline]
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        RGBSpectrum { c: [r, g, b] }
    }

    #[inline]
    pub fn zero() -> Self {
        RGBSpectrum { c: [0.0, 0.0, 0.0] }
    }

    #[inline]
    pub fn one() -> Self {
        RGBSpectrum { c: [1.0, 1.0, 1.0] }
    }

    pub fn max_component_value(&self) -> Float {
        let c = &self.c;
        return Float::max(c[0], Float::max(c[1], c[2]));
    }

    pub fn to_rgb(&self) -> [Float; 3] {
        return self.c;
    }

    pub fn is_black(&self) -> bool {
        return self.c.iter().all(|v| *v == 0.0);
    }

    /// True when every channel is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        return self.c.iter().all(|v| v.is_finite() && *v >= 0.0);
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        return &self.c[i];
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: Float) -> RGBSpectrum {
        return RGBSpectrum::new(self.c[0] * s, self.c[1] * s, self.c[2] * s);
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        return rhs * self;
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn div(self, s: Float) -> RGBSpectrum {
        return RGBSpectrum::new(self.c[0] / s, self.c[1] / s, self.c[2] / s);
    }
}

impl ops::Add<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn add(self, s: RGBSpectrum) -> RGBSpectrum {
        return RGBSpectrum::new(self.c[0] + s.c[0], self.c[1] + s.c[1], self.c[2] + s.c[2]);
    }
}

impl ops::Mul<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: RGBSpectrum) -> RGBSpectrum {
        return RGBSpectrum::new(self.c[0] * s.c[0], self.c[1] * s.c[1], self.c[2] * s.c[2]);
    }
}

impl ops::AddAssign<RGBSpectrum> for RGBSpectrum {
    #[inline]
    fn add_assign(&mut self, s: RGBSpectrum) {
        for i in 0..Self::N_SAMPLES {
            self.c[i] += s.c[i];
        }
    }
}

impl ops::MulAssign<Float> for RGBSpectrum {
    #[inline]
    fn mul_assign(&mut self, s: Float) {
        for v in self.c.iter_mut() {
            *v *= s;
        }
    }
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Float> for RGBSpectrum {
    #[inline]
    fn from(value: Float) -> Self {
        RGBSpectrum::new(value, value, value)
    }
}

impl From<[Float; 3]> for RGBSpectrum {
    #[inline]
    fn from(value: [Float; 3]) -> Self {
        RGBSpectrum { c: value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let a = RGBSpectrum::new(1.0, 2.0, 3.0);
        let b = RGBSpectrum::from(2.0);
        assert_eq!(a * b, RGBSpectrum::new(2.0, 4.0, 6.0));
        assert_eq!(a + b, RGBSpectrum::new(3.0, 4.0, 5.0));
        assert_eq!(a.max_component_value(), 3.0);
    }

    #[test]
    fn test_002() {
        assert!(RGBSpectrum::one().is_valid());
        assert!(RGBSpectrum::zero().is_black());
        assert!(!RGBSpectrum::new(1.0, Float::NAN, 0.0).is_valid());
        assert!(!RGBSpectrum::new(1.0, -0.5, 0.0).is_valid());
        assert!(!RGBSpectrum::from(Float::INFINITY).is_valid());
    }

    #[test]
    fn test_003() {
        let mut a = RGBSpectrum::from([2.0, 4.0, 8.0]);
        a *= 0.5;
        assert_eq!(a.to_rgb(), [1.0, 2.0, 4.0]);
        assert_eq!(a / 2.0, RGBSpectrum::new(0.5, 1.0, 2.0));
        assert_eq!(0.5 * a, a * 0.5);
    }
}
