use crate::core::base::*;
use crate::core::reflection::*;
use crate::core::rng::RNG;
use crate::core::spectrum::*;

use super::progressreporter::*;

use rayon::prelude::*;
use serde::Serialize;

const SAMPLES_PER_TASK: usize = 4096;

/// Monte Carlo summary of one scattering model seen from a fixed direction.
#[derive(Debug, Clone, Serialize)]
pub struct AlbedoReport {
    pub name: String,
    pub description: String,
    pub cos_theta: Float,
    pub samples: usize,
    pub failures: usize,
    pub reflection_fraction: Float,
    pub transmission_fraction: Float,
    pub mean_weight: [Float; 3],
    pub fresnel: Option<Float>,
}

impl AlbedoReport {
    pub fn new(
        bsdf: &dyn Bsdf,
        cos_theta: Float,
        stats: &LobeStatistics,
        fresnel: Option<Float>,
    ) -> Self {
        let name = bsdf.name().unwrap_or("<anonymous>").to_string();
        AlbedoReport {
            name,
            description: bsdf.to_string(),
            cos_theta,
            samples: stats.samples,
            failures: stats.failures,
            reflection_fraction: stats.reflection_fraction(),
            transmission_fraction: stats.transmission_fraction(),
            mean_weight: stats.mean_weight().to_rgb(),
            fresnel,
        }
    }
}

/// Incident direction in the local xz-plane with the given cosine.
/// Negative cosines arrive from below the surface.
pub fn incident_direction(cos_theta: Float) -> Vector3f {
    let cos_theta = cos_theta.clamp(-1.0, 1.0);
    let sin_theta = Float::sqrt(Float::max(0.0, 1.0 - cos_theta * cos_theta));
    return Vector3f::new(sin_theta, 0.0, cos_theta);
}

/// Number of fixed-size tasks covering `samples`.
pub fn task_count(samples: usize) -> usize {
    return samples.div_ceil(SAMPLES_PER_TASK);
}

/// Progress total for sampling every model of a library. Saturates instead
/// of wrapping.
pub fn total_samples(samples_per_bsdf: usize, bsdfs: usize) -> usize {
    return samples_per_bsdf.saturating_mul(bsdfs);
}

/// Samples `bsdf` `samples` times in parallel. Every task draws from its own
/// PCG32 stream derived from `seed`, so results do not depend on the
/// thread count.
pub fn estimate_statistics(
    bsdf: &dyn Bsdf,
    wi: &Vector3f,
    samples: usize,
    seed: u64,
    reporter: &ProgressReporter,
) -> LobeStatistics {
    return (0..task_count(samples))
        .into_par_iter()
        .map(|i| {
            let start = i * SAMPLES_PER_TASK;
            let n = usize::min(SAMPLES_PER_TASK, samples - start);
            let mut rng = RNG::new_sequence(seed.wrapping_add(i as u64));
            let stats = bsdf.sample_statistics(wi, &mut rng, n);
            reporter.update(n);
            stats
        })
        .reduce(LobeStatistics::default, |a, b| a + b);
}

/// Energy carried by a statistics run with the transmitted weights divided
/// by their eta² radiance scale. Stays at or below one for a lossless
/// interface.
pub fn normalized_throughput(stats: &LobeStatistics, transmitted_scale: Float) -> Spectrum {
    if stats.samples == 0 {
        return Spectrum::zero();
    }
    let n = stats.samples as Float;
    let r = stats.reflection_fraction();
    let t = stats.transmitted_weight_sum / (transmitted_scale * n);
    return Spectrum::from(r) + t;
}
