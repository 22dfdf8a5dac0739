use crate::core::base::*;
use crate::core::error::*;
use crate::core::spectrum::*;

use serde_json::{Map, Number, Value};

/// Key/value configuration document of one scene object.
///
/// Finders distinguish an absent key (`Ok(None)`) from a key holding a value
/// of the wrong type (`Err`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    values: Map<String, Value>,
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_error(key: &str, expected: &str, v: &Value) -> BsdfError {
    let msg = format!(
        "Parameter \"{}\" expects a {} but was given a {} ({})",
        key,
        expected,
        type_name(v),
        v
    );
    return BsdfError::error(&msg);
}

// Non-finite floats have no JSON representation.
fn float_value(v: Float) -> Value {
    match Number::from_f64(v as f64) {
        Some(n) => Value::Number(n),
        None => Value::Null,
    }
}

impl ParamSet {
    pub fn new() -> Self {
        ParamSet { values: Map::new() }
    }

    pub fn from_value(value: &Value) -> Result<Self, BsdfError> {
        match value {
            Value::Object(m) => Ok(ParamSet { values: m.clone() }),
            v => Err(BsdfError::error(&format!(
                "Expected a JSON object but was given a {}",
                type_name(v)
            ))),
        }
    }

    pub fn parse(s: &str) -> Result<Self, BsdfError> {
        let value: Value = serde_json::from_str(s)?;
        return Self::from_value(&value);
    }

    pub fn to_value(&self) -> Value {
        return Value::Object(self.values.clone());
    }

    pub fn get_keys(&self) -> Vec<String> {
        return self.values.keys().cloned().collect();
    }

    pub fn find_float(&self, key: &str) -> Result<Option<Float>, BsdfError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) => Ok(Some(f as Float)),
                None => Err(type_error(key, "float", &Value::Number(n.clone()))),
            },
            Some(v) => Err(type_error(key, "float", v)),
        }
    }

    pub fn find_one_float(&self, key: &str, value: Float) -> Result<Float, BsdfError> {
        return Ok(self.find_float(key)?.unwrap_or(value));
    }

    pub fn find_bool(&self, key: &str) -> Result<Option<bool>, BsdfError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(v) => Err(type_error(key, "bool", v)),
        }
    }

    pub fn find_one_bool(&self, key: &str, value: bool) -> Result<bool, BsdfError> {
        return Ok(self.find_bool(key)?.unwrap_or(value));
    }

    pub fn find_string(&self, key: &str) -> Result<Option<String>, BsdfError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(v) => Err(type_error(key, "string", v)),
        }
    }

    pub fn find_one_string(&self, key: &str, value: &str) -> Result<String, BsdfError> {
        return Ok(self
            .find_string(key)?
            .unwrap_or_else(|| value.to_string()));
    }

    /// A spectrum is either a single number (grey) or an `[r, g, b]` array.
    pub fn find_spectrum(&self, key: &str) -> Result<Option<Spectrum>, BsdfError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) => Ok(Some(Spectrum::from(f as Float))),
                None => Err(type_error(key, "spectrum", &Value::Number(n.clone()))),
            },
            Some(Value::Array(a)) if a.len() == 3 => {
                let mut c: [Float; 3] = [0.0; 3];
                for (i, v) in a.iter().enumerate() {
                    match v.as_f64() {
                        Some(f) => c[i] = f as Float,
                        None => return Err(type_error(key, "spectrum", v)),
                    }
                }
                Ok(Some(Spectrum::from(c)))
            }
            Some(v) => Err(type_error(key, "spectrum", v)),
        }
    }

    pub fn find_one_spectrum(&self, key: &str, value: Spectrum) -> Result<Spectrum, BsdfError> {
        return Ok(self.find_spectrum(key)?.unwrap_or(value));
    }

    pub fn add_float(&mut self, key: &str, v: Float) {
        self.values.insert(key.to_string(), float_value(v));
    }

    pub fn add_spectrum(&mut self, key: &str, v: &Spectrum) {
        let c = v.to_rgb();
        if c[0] == c[1] && c[1] == c[2] {
            self.add_float(key, c[0]);
        } else {
            let a = c.iter().map(|f| float_value(*f)).collect();
            self.values.insert(key.to_string(), Value::Array(a));
        }
    }

    pub fn add_bool(&mut self, key: &str, v: bool) {
        self.values.insert(key.to_string(), Value::Bool(v));
    }

    pub fn add_string(&mut self, key: &str, v: &str) {
        self.values
            .insert(key.to_string(), Value::String(v.to_string()));
    }
}

impl From<ParamSet> for Value {
    fn from(params: ParamSet) -> Self {
        Value::Object(params.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_float() {
        let ps = ParamSet::parse(r#"{ "ior": 1.33, "count": 2, "name": "water" }"#).unwrap();
        assert_eq!(ps.find_float("ior").unwrap(), Some(1.33));
        assert_eq!(ps.find_float("count").unwrap(), Some(2.0));
        assert_eq!(ps.find_float("missing").unwrap(), None);
        assert_eq!(ps.find_one_float("missing", 1.5).unwrap(), 1.5);
        assert!(ps.find_float("name").is_err());
    }

    #[test]
    fn test_find_bool() {
        let ps = ParamSet::parse(r#"{ "a": true, "b": "true", "c": 1 }"#).unwrap();
        assert_eq!(ps.find_bool("a").unwrap(), Some(true));
        assert!(ps.find_bool("b").is_err());
        assert!(ps.find_bool("c").is_err());
        assert_eq!(ps.find_one_bool("d", false).unwrap(), false);
    }

    #[test]
    fn test_find_string() {
        let ps = ParamSet::parse(r#"{ "type": "dielectric", "n": null }"#).unwrap();
        assert_eq!(ps.find_one_string("type", "").unwrap(), "dielectric");
        assert!(ps.find_string("n").is_err());
    }

    #[test]
    fn test_not_an_object() {
        assert!(ParamSet::parse("[1, 2]").is_err());
        assert!(ParamSet::parse("\"glass\"").is_err());
        assert!(ParamSet::parse("{").is_err());
    }

    #[test]
    fn test_add() {
        let mut ps = ParamSet::new();
        ps.add_float("ior", 1.5);
        ps.add_bool("enableTransmission", false);
        ps.add_string("type", "dielectric");
        let v: Value = ps.clone().into();
        assert_eq!(v["ior"], 1.5);
        assert_eq!(v["enableTransmission"], false);
        assert_eq!(v["type"], "dielectric");
        assert_eq!(ParamSet::from_value(&v).unwrap(), ps);
        assert_eq!(ps.get_keys().len(), 3);
    }

    #[test]
    fn test_spectrum() {
        let ps = ParamSet::parse(
            r#"{ "grey": 0.5, "rgb": [0.25, 0.5, 1], "short": [1, 2], "bad": [1, "x", 2] }"#,
        )
        .unwrap();
        assert_eq!(ps.find_spectrum("grey").unwrap(), Some(Spectrum::from(0.5)));
        assert_eq!(
            ps.find_spectrum("rgb").unwrap(),
            Some(Spectrum::new(0.25, 0.5, 1.0))
        );
        assert!(ps.find_spectrum("short").is_err());
        assert!(ps.find_spectrum("bad").is_err());
        assert_eq!(
            ps.find_one_spectrum("missing", Spectrum::one()).unwrap(),
            Spectrum::one()
        );

        let mut out = ParamSet::new();
        out.add_spectrum("grey", &Spectrum::from(0.5));
        out.add_spectrum("rgb", &Spectrum::new(0.25, 0.5, 1.0));
        let v = out.to_value();
        assert_eq!(v["grey"], 0.5);
        assert_eq!(v["rgb"], serde_json::json!([0.25, 0.5, 1.0]));
    }
}
