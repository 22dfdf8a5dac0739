use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::reflection::*;
use crate::core::sampler::*;
use crate::core::spectrum::*;

/// Record of one scattering decision at a surface hit.
///
/// All directions are unit vectors in the local shading frame, where the
/// shading normal is (0, 0, 1). `wi` points away from the surface toward the
/// previous path vertex. `wo`, `weight`, `pdf`, `sampled_lobe` and `specular`
/// are written by `Bsdf::sample` and are only meaningful after it succeeds.
pub struct SurfaceScatterEvent<'a> {
    /// World-space shading frame of the hit.
    pub frame: Frame,
    pub geometric_normal: Vector3f,
    pub shading_normal: Vector3f,
    pub wi: Vector3f,
    pub wo: Vector3f,
    pub sampler: &'a mut dyn SampleGenerator,
    pub requested_lobe: BsdfLobes,
    /// Throughput multiplier, already divided by the sampling density.
    pub weight: Spectrum,
    /// Discrete probability of the chosen lobe.
    pub pdf: Float,
    pub sampled_lobe: BsdfLobes,
    /// The sampled lobe is a Dirac delta; `eval`/`pdf` cannot reproduce it.
    pub specular: bool,
}

impl<'a> SurfaceScatterEvent<'a> {
    pub fn new(
        wi: &Vector3f,
        sampler: &'a mut dyn SampleGenerator,
        requested_lobe: BsdfLobes,
    ) -> Self {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        SurfaceScatterEvent {
            frame: Frame::default(),
            geometric_normal: n,
            shading_normal: n,
            wi: *wi,
            wo: Vector3f::zero(),
            sampler,
            requested_lobe,
            weight: Spectrum::zero(),
            pdf: 0.0,
            sampled_lobe: BSDF_NONE,
            specular: false,
        }
    }

    /// Builds a local event from world-space hit data. `wi_world` points away
    /// from the surface.
    pub fn from_world(
        frame: &Frame,
        ng_world: &Vector3f,
        wi_world: &Vector3f,
        sampler: &'a mut dyn SampleGenerator,
        requested_lobe: BsdfLobes,
    ) -> Self {
        let wi = frame.to_local(wi_world);
        let mut event = Self::new(&wi, sampler, requested_lobe);
        event.frame = *frame;
        event.geometric_normal = frame.to_local(ng_world);
        return event;
    }

    /// Query event for `eval`/`pdf` with an explicit direction pair, sharing
    /// this event's frame, normals and sampler.
    pub fn make_warped_query(&mut self, wi: &Vector3f, wo: &Vector3f) -> SurfaceScatterEvent<'_> {
        SurfaceScatterEvent {
            frame: self.frame,
            geometric_normal: self.geometric_normal,
            shading_normal: self.shading_normal,
            wi: *wi,
            wo: *wo,
            sampler: &mut *self.sampler,
            requested_lobe: self.requested_lobe,
            weight: Spectrum::zero(),
            pdf: 0.0,
            sampled_lobe: BSDF_NONE,
            specular: false,
        }
    }

    pub fn world_wi(&self) -> Vector3f {
        return self.frame.to_world(&self.wi);
    }

    pub fn world_wo(&self) -> Vector3f {
        return self.frame.to_world(&self.wo);
    }

    /// True when `w` lies on the same side of the geometric surface as `wi`.
    pub fn same_geometric_side(&self, w: &Vector3f) -> bool {
        return self.geometric_normal.dot(&self.wi) * self.geometric_normal.dot(w) > 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::RNG;

    fn near_equal(a: &Vector3f, b: &Vector3f) -> bool {
        (*a - *b).length() < 1e-5
    }

    #[test]
    fn test_new() {
        let mut rng = RNG::new();
        let wi = Vector3f::new(0.0, 0.6, 0.8);
        let event = SurfaceScatterEvent::new(&wi, &mut rng, BSDF_ALL);
        assert_eq!(event.wi, wi);
        assert_eq!(event.shading_normal, Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(event.requested_lobe, BSDF_ALL);
        assert!(!event.specular);
        assert_eq!(event.sampled_lobe, BSDF_NONE);
    }

    #[test]
    fn test_from_world() {
        let mut rng = RNG::new();
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let frame = Frame::from_normal(&n);
        let wi_world = Vector3f::new(0.6, 0.8, 0.0);
        let event = SurfaceScatterEvent::from_world(&frame, &n, &wi_world, &mut rng, BSDF_ALL);
        assert!((event.wi.z - 0.8).abs() < 1e-6);
        assert!(near_equal(&event.geometric_normal, &Vector3f::new(0.0, 0.0, 1.0)));
        assert!(near_equal(&event.world_wi(), &wi_world));
    }

    #[test]
    fn test_warped_query() {
        let mut rng = RNG::new_sequence(2);
        let wi = Vector3f::new(0.0, 0.0, 1.0);
        let mut event = SurfaceScatterEvent::new(&wi, &mut rng, BSDF_ALL_REFLECTION);
        let wo = Vector3f::new(0.0, 0.6, -0.8);
        let query = event.make_warped_query(&wi, &wo);
        assert_eq!(query.wo, wo);
        assert_eq!(query.requested_lobe, BSDF_ALL_REFLECTION);
        assert!(!query.same_geometric_side(&wo));
        assert!(query.same_geometric_side(&Vector3f::new(0.0, 0.6, 0.8)));
    }
}
