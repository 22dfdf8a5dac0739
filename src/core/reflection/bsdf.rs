use crate::core::base::*;
use crate::core::error::*;
use crate::core::interaction::*;
use crate::core::param_set::*;
use crate::core::reflection::*;
use crate::core::sampler::*;
use crate::core::scene::*;
use crate::core::spectrum::*;

use std::ops;

use log::*;

/// Parameters shared by every scattering model.
#[derive(Debug, Clone, PartialEq)]
pub struct BsdfBase {
    pub name: Option<String>,
    /// Constant tint applied to every sampled weight.
    pub albedo: Spectrum,
}

pub const BSDF_BASE_KEYS: &[&str] = &["type", "name", "albedo"];

impl BsdfBase {
    pub fn from_json(&mut self, params: &ParamSet) -> Result<(), BsdfError> {
        let name = params.find_string("name")?;
        let albedo = params.find_one_spectrum("albedo", self.albedo)?;
        if !albedo.is_valid() {
            let msg = format!(
                "\"albedo\" must be finite and non-negative, got {:?}",
                albedo.to_rgb()
            );
            return Err(BsdfError::error(&msg));
        }
        if name.is_some() {
            self.name = name;
        }
        self.albedo = albedo;
        return Ok(());
    }

    /// The albedo is only written when it differs from white.
    pub fn to_json(&self, type_name: &str) -> ParamSet {
        let mut params = ParamSet::new();
        params.add_string("type", type_name);
        if let Some(name) = self.name.as_ref() {
            params.add_string("name", name);
        }
        if self.albedo != Spectrum::one() {
            params.add_spectrum("albedo", &self.albedo);
        }
        return params;
    }
}

impl Default for BsdfBase {
    fn default() -> Self {
        BsdfBase {
            name: None,
            albedo: Spectrum::one(),
        }
    }
}

/// Reports keys no one consumed. They are legal, just ignored.
pub fn log_unknown_keys(params: &ParamSet, type_name: &str, known: &[&str]) {
    for key in params.get_keys() {
        if !known.contains(&key.as_str()) && !BSDF_BASE_KEYS.contains(&key.as_str()) {
            debug!(
                "Ignoring unknown parameter \"{}\" of {} bsdf.",
                key, type_name
            );
        }
    }
}

/// Surface scattering model.
///
/// Implementations are configured once at scene load and then shared
/// read-only between rendering threads.
pub trait Bsdf: Send + Sync {
    fn base(&self) -> &BsdfBase;

    /// Reads the parameters this model owns. Absent keys keep their current
    /// values; a present key holding an invalid value is an error.
    fn from_json(&mut self, params: &ParamSet, scene: &SceneContext) -> Result<(), BsdfError>;

    fn to_json(&self) -> ParamSet;

    /// Picks `wo` for `event.wi` and writes the weight (value / pdf).
    /// Returns false, leaving the event untouched, when nothing can scatter
    /// into the requested lobes.
    fn sample(&self, event: &mut SurfaceScatterEvent) -> bool;

    /// Value of the scattering function for the event's `wi`/`wo` pair.
    fn eval(&self, event: &SurfaceScatterEvent) -> Spectrum;

    /// Density with which `sample` produces the event's `wo`.
    fn pdf(&self, event: &SurfaceScatterEvent) -> Float;

    fn lobes(&self) -> BsdfLobes;

    fn is_dirac(&self) -> bool {
        return lobes_is_pure_specular(self.lobes());
    }

    fn name(&self) -> Option<&str> {
        return self.base().name.as_deref();
    }

    /// Monte Carlo estimate of the directional albedo seen from `wi`.
    fn rho(&self, wi: &Vector3f, sampler: &mut dyn SampleGenerator, n: usize) -> Spectrum {
        return self.sample_statistics(wi, sampler, n).mean_weight();
    }

    fn sample_statistics(
        &self,
        wi: &Vector3f,
        sampler: &mut dyn SampleGenerator,
        n: usize,
    ) -> LobeStatistics {
        let mut stats = LobeStatistics::default();
        for _ in 0..n {
            let mut event = SurfaceScatterEvent::new(wi, sampler, BSDF_ALL);
            if self.sample(&mut event) {
                stats.add(&event);
            } else {
                stats.add_failure();
            }
        }
        return stats;
    }

    fn to_string(&self) -> String {
        return format!("[ Bsdf {} ]", self.to_json().to_value());
    }
}

/// Accumulated outcome of repeated `sample` calls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LobeStatistics {
    pub samples: usize,
    pub failures: usize,
    pub reflections: usize,
    pub transmissions: usize,
    pub weight_sum: Spectrum,
    pub transmitted_weight_sum: Spectrum,
}

impl LobeStatistics {
    pub fn add(&mut self, event: &SurfaceScatterEvent) {
        self.samples += 1;
        if lobes_test(event.sampled_lobe, BSDF_TRANSMISSION) {
            self.transmissions += 1;
            self.transmitted_weight_sum += event.weight;
        } else {
            self.reflections += 1;
        }
        self.weight_sum += event.weight;
    }

    pub fn add_failure(&mut self) {
        self.samples += 1;
        self.failures += 1;
    }

    pub fn mean_weight(&self) -> Spectrum {
        if self.samples == 0 {
            return Spectrum::zero();
        }
        return self.weight_sum / self.samples as Float;
    }

    pub fn reflection_fraction(&self) -> Float {
        if self.samples == 0 {
            return 0.0;
        }
        return self.reflections as Float / self.samples as Float;
    }

    pub fn transmission_fraction(&self) -> Float {
        if self.samples == 0 {
            return 0.0;
        }
        return self.transmissions as Float / self.samples as Float;
    }
}

impl ops::Add<LobeStatistics> for LobeStatistics {
    type Output = LobeStatistics;
    fn add(self, rhs: LobeStatistics) -> LobeStatistics {
        LobeStatistics {
            samples: self.samples + rhs.samples,
            failures: self.failures + rhs.failures,
            reflections: self.reflections + rhs.reflections,
            transmissions: self.transmissions + rhs.transmissions,
            weight_sum: self.weight_sum + rhs.weight_sum,
            transmitted_weight_sum: self.transmitted_weight_sum + rhs.transmitted_weight_sum,
        }
    }
}
