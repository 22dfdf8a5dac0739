use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BsdfErrorKind {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BsdfError {
    pub kind: BsdfErrorKind,
    pub msg: String,
}

impl BsdfError {
    pub fn error(msg: &str) -> Self {
        BsdfError {
            kind: BsdfErrorKind::Error,
            msg: msg.to_string(),
        }
    }

    pub fn warning(msg: &str) -> Self {
        BsdfError {
            kind: BsdfErrorKind::Warning,
            msg: msg.to_string(),
        }
    }

    pub fn is_warning(&self) -> bool {
        return self.kind == BsdfErrorKind::Warning;
    }
}

impl fmt::Display for BsdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BsdfErrorKind::Error => write!(f, "Error: {}", self.msg),
            BsdfErrorKind::Warning => write!(f, "Warning: {}", self.msg),
        }
    }
}

impl std::error::Error for BsdfError {}

impl From<&str> for BsdfError {
    fn from(msg: &str) -> Self {
        BsdfError::error(msg)
    }
}

impl From<String> for BsdfError {
    fn from(msg: String) -> Self {
        BsdfError {
            kind: BsdfErrorKind::Error,
            msg,
        }
    }
}

impl From<std::io::Error> for BsdfError {
    fn from(e: std::io::Error) -> Self {
        BsdfError::from(e.to_string())
    }
}

impl From<serde_json::Error> for BsdfError {
    fn from(e: serde_json::Error) -> Self {
        BsdfError::from(format!("JSON: {}", e))
    }
}
