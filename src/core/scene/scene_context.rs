use crate::bsdfs::create_bsdf;
use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::reflection::*;

use serde_json::Value;

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::*;

/// Library of scattering models built while loading a scene.
///
/// Models are resolved by name for documents that refer to a previously
/// declared bsdf with a plain string.
#[derive(Default)]
pub struct SceneContext {
    bsdfs: Vec<Arc<dyn Bsdf>>,
    names: HashMap<String, usize>,
}

impl SceneContext {
    pub fn new() -> Self {
        SceneContext::default()
    }

    pub fn bsdfs(&self) -> &[Arc<dyn Bsdf>] {
        return &self.bsdfs;
    }

    pub fn len(&self) -> usize {
        return self.bsdfs.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.bsdfs.is_empty();
    }

    pub fn find_bsdf(&self, name: &str) -> Option<Arc<dyn Bsdf>> {
        return self.names.get(name).map(|i| self.bsdfs[*i].clone());
    }

    pub fn add_bsdf(&mut self, bsdf: Arc<dyn Bsdf>) -> Result<(), BsdfError> {
        if let Some(name) = bsdf.name() {
            if self.names.contains_key(name) {
                let msg = format!("Bsdf \"{}\" is defined more than once.", name);
                return Err(BsdfError::error(&msg));
            }
            self.names.insert(name.to_string(), self.bsdfs.len());
        }
        self.bsdfs.push(bsdf);
        return Ok(());
    }

    /// Resolves a bsdf reference: a string names an already declared model,
    /// an object declares a new one.
    pub fn fetch_bsdf(&mut self, value: &Value) -> Result<Arc<dyn Bsdf>, BsdfError> {
        match value {
            Value::String(name) => match self.find_bsdf(name) {
                Some(bsdf) => Ok(bsdf),
                None => Err(BsdfError::error(&format!(
                    "Unable to find a bsdf with name \"{}\".",
                    name
                ))),
            },
            Value::Object(_) => {
                let params = ParamSet::from_value(value)?;
                let bsdf = create_bsdf(&params, self)?;
                self.add_bsdf(bsdf.clone())?;
                Ok(bsdf)
            }
            v => Err(BsdfError::error(&format!(
                "Bsdf reference must be a name or an object, got {}",
                v
            ))),
        }
    }

    /// Loads every entry of the document's `"bsdfs"` array. Returns the number
    /// of entries read, references included.
    pub fn load_bsdfs(&mut self, document: &Value) -> Result<usize, BsdfError> {
        let entries = match document.get("bsdfs") {
            None => return Ok(0),
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(BsdfError::error("\"bsdfs\" must be an array.")),
        };
        for entry in entries {
            let bsdf = self.fetch_bsdf(entry)?;
            debug!("Loaded {}", bsdf.to_string());
        }
        return Ok(entries.len());
    }

    pub fn to_json(&self) -> Value {
        let bsdfs: Vec<Value> = self
            .bsdfs
            .iter()
            .map(|b| Value::from(b.to_json()))
            .collect();
        let mut document = serde_json::Map::new();
        document.insert("bsdfs".to_string(), Value::Array(bsdfs));
        return Value::Object(document);
    }
}

pub fn load_scene_file(path: &Path) -> Result<SceneContext, BsdfError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let document: Value = serde_json::from_reader(reader)?;
    let mut scene = SceneContext::new();
    let n = scene.load_bsdfs(&document)?;
    info!("Loaded {} bsdfs from {}.", n, path.display());
    return Ok(scene);
}
