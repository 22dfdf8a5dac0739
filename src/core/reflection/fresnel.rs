use crate::core::base::*;

/// Unpolarised Fresnel reflectance of a smooth dielectric interface.
///
/// `eta` is the ratio of refractive indices, transmitted over incident, as
/// seen from the side the light arrives on. A negative `cos_theta_i` means the
/// light arrives from the other side; the ratio is then inverted.
///
/// Returns the reflectance and the cosine of the refracted direction. Under
/// total internal reflection the reflectance is exactly 1 and the cosine 0.
pub fn dielectric_reflectance(eta: Float, cos_theta_i: Float) -> (Float, Float) {
    let mut eta = eta;
    let mut cos_theta_i = Float::clamp(cos_theta_i, -1.0, 1.0);
    if cos_theta_i < 0.0 {
        eta = 1.0 / eta;
        cos_theta_i = -cos_theta_i;
    }

    // Snell's law
    let sin2_theta_t = (1.0 - cos_theta_i * cos_theta_i) / (eta * eta);
    // Handle total internal reflection
    if sin2_theta_t >= 1.0 {
        return (1.0, 0.0);
    }
    let cos_theta_t = Float::sqrt(Float::max(0.0, 1.0 - sin2_theta_t));

    let rs = (cos_theta_i - eta * cos_theta_t) / (cos_theta_i + eta * cos_theta_t);
    let rp = (eta * cos_theta_i - cos_theta_t) / (eta * cos_theta_i + cos_theta_t);
    let f = (rs * rs + rp * rp) * 0.5;
    return (Float::min(f, 1.0), cos_theta_t);
}

/// Fresnel reflectance for light travelling from a medium of index `eta_i`
/// into one of index `eta_t`.
pub fn fr_dielectric(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    return dielectric_reflectance(eta_t / eta_i, cos_theta_i).0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near_equal(a: Float, b: Float, e: Float) -> bool {
        (a - b).abs() < e
    }

    // Textbook form with explicit indices.
    fn fr_reference(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
        let sin_theta_i = Float::sqrt(Float::max(0.0, 1.0 - cos_theta_i * cos_theta_i));
        let sin_theta_t = eta_i / eta_t * sin_theta_i;
        if sin_theta_t >= 1.0 {
            return 1.0;
        }
        let cos_theta_t = Float::sqrt(Float::max(0.0, 1.0 - sin_theta_t * sin_theta_t));
        let rparl = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
            / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
        let rperp = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
            / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
        return (rparl * rparl + rperp * rperp) / 2.0;
    }

    #[test]
    fn test_normal_incidence() {
        let (f, cos_t) = dielectric_reflectance(1.5, 1.0);
        assert!(near_equal(f, 0.04, 1e-6), "f: {}", f);
        assert!(near_equal(cos_t, 1.0, 1e-6));
        // Same interface seen from inside.
        let (f, _) = dielectric_reflectance(1.5, -1.0);
        assert!(near_equal(f, 0.04, 1e-6), "f: {}", f);
    }

    #[test]
    fn test_against_reference() {
        for i in 1..=32 {
            let cos_i = i as Float / 32.0;
            for (eta_i, eta_t) in [(1.0, 1.5), (1.5, 1.0), (1.0, 1.33), (1.0, 2.4)] {
                let expected = fr_reference(cos_i, eta_i, eta_t);
                let f = fr_dielectric(cos_i, eta_i, eta_t);
                assert!(
                    near_equal(f, expected, 1e-5),
                    "cos: {} eta: {}/{} {} != {}",
                    cos_i,
                    eta_i,
                    eta_t,
                    f,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_grazing() {
        let (f, cos_t) = dielectric_reflectance(1.5, 0.0);
        assert_eq!(f, 1.0);
        assert!(cos_t > 0.0);
        let (f, cos_t) = dielectric_reflectance(1.0, 0.0);
        assert_eq!(f, 1.0);
        assert_eq!(cos_t, 0.0);
    }

    #[test]
    fn test_total_internal_reflection() {
        // Leaving glass: critical angle at sin = 1 / 1.5.
        let eta = 1.0 / 1.5;
        let sin_i: Float = 0.7;
        let cos_i = Float::sqrt(1.0 - sin_i * sin_i);
        assert_eq!(dielectric_reflectance(eta, cos_i), (1.0, 0.0));
        let sin_i: Float = 0.6;
        let cos_i = Float::sqrt(1.0 - sin_i * sin_i);
        let (f, _) = dielectric_reflectance(eta, cos_i);
        assert!(f < 1.0);
    }

    #[test]
    fn test_index_matched() {
        for i in 1..=16 {
            let cos_i = i as Float / 16.0;
            let (f, cos_t) = dielectric_reflectance(1.0, cos_i);
            assert!(near_equal(f, 0.0, 1e-6));
            assert!(near_equal(cos_t, cos_i, 1e-6));
        }
    }

    #[test]
    fn test_range() {
        for i in 0..=64 {
            let cos_i = i as Float / 32.0 - 1.0;
            for eta in [0.5, 1.0 / 1.5, 1.0, 1.33, 1.5, 2.4] {
                let (f, cos_t) = dielectric_reflectance(eta, cos_i);
                assert!((0.0..=1.0).contains(&f), "cos: {} eta: {} f: {}", cos_i, eta, f);
                assert!((0.0..=1.0).contains(&cos_t));
            }
        }
    }
}
