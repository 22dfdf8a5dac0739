use crate::core::base::*;
use crate::core::error::*;
use crate::core::interaction::*;
use crate::core::param_set::*;
use crate::core::reflection::*;
use crate::core::scene::*;
use crate::core::spectrum::*;

use std::sync::Arc;

const DIELECTRIC_KEYS: &[&str] = &["ior", "enableTransmission"];

/// Perfectly smooth interface between a medium of index 1 (the side the
/// shading normal points into) and a medium of index `ior`.
///
/// With transmission disabled the interface is a perfect mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct DielectricBsdf {
    base: BsdfBase,
    ior: Float,
    inv_ior: Float,
    enable_t: bool,
}

impl DielectricBsdf {
    pub fn new(ior: Float) -> Self {
        debug_assert!(ior > 0.0);
        DielectricBsdf {
            base: BsdfBase::default(),
            ior,
            inv_ior: 1.0 / ior,
            enable_t: true,
        }
    }

    pub fn with_transmission(mut self, enable_t: bool) -> Self {
        self.enable_t = enable_t;
        return self;
    }

    pub fn ior(&self) -> Float {
        return self.ior;
    }

    pub fn transmission_enabled(&self) -> bool {
        return self.enable_t;
    }
}

impl Default for DielectricBsdf {
    fn default() -> Self {
        Self::new(DEFAULT_IOR)
    }
}

impl Bsdf for DielectricBsdf {
    fn base(&self) -> &BsdfBase {
        return &self.base;
    }

    fn from_json(&mut self, params: &ParamSet, _scene: &SceneContext) -> Result<(), BsdfError> {
        // Validate everything before touching any field.
        let mut base = self.base.clone();
        base.from_json(params)?;
        let ior = params.find_one_float("ior", self.ior)?;
        if !(ior > 0.0 && ior.is_finite()) {
            let msg = format!(
                "Dielectric bsdf: \"ior\" must be a positive number, got {}",
                ior
            );
            return Err(BsdfError::error(&msg));
        }
        let enable_t = params.find_one_bool("enableTransmission", self.enable_t)?;
        log_unknown_keys(params, "dielectric", DIELECTRIC_KEYS);

        self.base = base;
        self.ior = ior;
        self.inv_ior = 1.0 / ior;
        self.enable_t = enable_t;
        return Ok(());
    }

    fn to_json(&self) -> ParamSet {
        let mut params = self.base.to_json("dielectric");
        params.add_float("ior", self.ior);
        params.add_bool("enableTransmission", self.enable_t);
        return params;
    }

    fn sample(&self, event: &mut SurfaceScatterEvent) -> bool {
        let sample_r = lobes_test(event.requested_lobe, BSDF_SPECULAR_REFLECTION);
        let sample_t =
            lobes_test(event.requested_lobe, BSDF_SPECULAR_TRANSMISSION) && self.enable_t;
        if !sample_r && !sample_t {
            return false;
        }

        // Grazing (cos == 0) counts as arriving from the normal side.
        let wi = event.wi;
        let eta = if cos_theta(&wi) < 0.0 {
            self.inv_ior
        } else {
            self.ior
        };
        let (f, cos_theta_t) = dielectric_reflectance(eta, abs_cos_theta(&wi));
        let tir = f >= 1.0;

        // The Fresnel factor of the chosen lobe always cancels against the
        // probability of choosing it; weights are never computed as F / F.
        let (is_reflection, weight, pdf) = if sample_r && sample_t {
            if tir || event.sampler.next_boolean(f) {
                (true, 1.0, f)
            } else {
                (false, eta * eta, 1.0 - f)
            }
        } else if sample_r {
            // With transmission physically possible but filtered out only the
            // reflected fraction leaves along this lobe.
            if self.enable_t {
                (true, f, 1.0)
            } else {
                (true, 1.0, 1.0)
            }
        } else {
            if tir {
                return false;
            }
            (false, (1.0 - f) * eta * eta, 1.0)
        };

        if is_reflection {
            event.wo = reflect_local(&wi);
            event.sampled_lobe = BSDF_SPECULAR_REFLECTION;
        } else {
            event.wo = refract_local(&wi, eta, cos_theta_t);
            event.sampled_lobe = BSDF_SPECULAR_TRANSMISSION;
        }
        event.weight = Spectrum::from(weight) * self.base.albedo;
        event.pdf = pdf;
        event.specular = true;
        return true;
    }

    fn eval(&self, _event: &SurfaceScatterEvent) -> Spectrum {
        // Dirac delta: zero for every concrete direction pair.
        return Spectrum::zero();
    }

    fn pdf(&self, _event: &SurfaceScatterEvent) -> Float {
        return 0.0;
    }

    fn lobes(&self) -> BsdfLobes {
        if self.enable_t {
            return BSDF_SPECULAR_REFLECTION | BSDF_SPECULAR_TRANSMISSION;
        }
        return BSDF_SPECULAR_REFLECTION;
    }

    fn to_string(&self) -> String {
        return format!(
            "[ DielectricBsdf ior: {} enableTransmission: {} ]",
            self.ior, self.enable_t
        );
    }
}

pub fn create_dielectric_bsdf(
    params: &ParamSet,
    scene: &SceneContext,
) -> Result<Arc<dyn Bsdf>, BsdfError> {
    let mut bsdf = DielectricBsdf::default();
    bsdf.from_json(params, scene)?;
    return Ok(Arc::new(bsdf));
}
