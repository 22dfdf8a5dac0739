use crate::core::base::*;

// BSDF Inline Functions
#[inline]
pub fn cos_theta(w: &Vector3f) -> Float {
    return w.z;
}

#[inline]
pub fn cos_2_theta(w: &Vector3f) -> Float {
    return w.z * w.z;
}

#[inline]
pub fn abs_cos_theta(w: &Vector3f) -> Float {
    return Float::abs(w.z);
}

#[inline]
pub fn sin_2_theta(w: &Vector3f) -> Float {
    return Float::max(0.0, 1.0 - cos_2_theta(w));
}

/// Mirror direction of `w` about the local normal (0, 0, 1).
#[inline]
pub fn reflect_local(w: &Vector3f) -> Vector3f {
    return Vector3f::new(-w.x, -w.y, w.z);
}

/// Refracted direction of `w` in the local frame.
///
/// `eta` is the ratio of indices (transmitted / incident) on the side `w`
/// lies on and `cos_theta_t` the transmitted cosine already obtained from the
/// Fresnel term, so the refraction never disagrees with the total internal
/// reflection test.
#[inline]
pub fn refract_local(w: &Vector3f, eta: Float, cos_theta_t: Float) -> Vector3f {
    let inv_eta = 1.0 / eta;
    return Vector3f::new(
        -w.x * inv_eta,
        -w.y * inv_eta,
        -Float::copysign(cos_theta_t, w.z),
    );
}

#[inline]
pub fn reflect(wo: &Vector3f, n: &Vector3f) -> Vector3f {
    let a = 2.0 * Vector3f::dot(wo, n) * *n;
    let b = -*wo;
    return a + b;
}

/// Snell refraction of `wi` about `n` (same side as `wi`), `eta` being
/// the incident / transmitted index ratio. None under total internal
/// reflection.
#[inline]
pub fn refract(wi: &Vector3f, n: &Vector3f, eta: Float) -> Option<Vector3f> {
    // Compute $\cos \theta_\roman{t}$ using Snell's law
    let cos_theta_i = Vector3f::dot(n, wi);
    let sin2_theta_i = Float::max(0.0, 1.0 - cos_theta_i * cos_theta_i);
    let sin2_theta_t = eta * eta * sin2_theta_i;
    // Handle total internal reflection for transmission
    if sin2_theta_t >= 1.0 {
        return None;
    }
    let cos_theta_t = Float::sqrt(1.0 - sin2_theta_t);
    let a = eta * -*wi;
    let b = (eta * cos_theta_i - cos_theta_t) * *n;
    return Some(a + b);
}
