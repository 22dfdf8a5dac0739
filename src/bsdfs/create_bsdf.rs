use super::dielectric::*;
use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::reflection::*;
use crate::core::scene::*;

use std::sync::Arc;

use log::*;

/// Builds the scattering model named by the document's `type` key.
pub fn create_bsdf(params: &ParamSet, scene: &SceneContext) -> Result<Arc<dyn Bsdf>, BsdfError> {
    let name = params.find_one_string("type", "")?;
    match name.as_str() {
        "dielectric" => {
            return create_dielectric_bsdf(params, scene);
        }
        "" => {
            return Err(BsdfError::error("Bsdf is missing a \"type\"."));
        }
        _ => {
            let msg = format!("Bsdf \"{}\" unknown.", name);
            error!("{}", msg);
            return Err(BsdfError::error(&msg));
        }
    }
}
