use std::fmt;

/// Result of reading one input of a form. `Ok(None)` means the input is not
/// there at all.
pub type FieldRead = Result<Option<String>, FieldReadError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldReadError {
    NotAnInput(String),
    Unavailable(String),
}

impl fmt::Display for FieldReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldReadError::NotAnInput(id) => {
                write!(f, "Element '{}' is not an input", id)
            }
            FieldReadError::Unavailable(msg) => {
                write!(f, "Field unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for FieldReadError {}

/// Text of `read`, or an empty string when the field is absent or failed to
/// read.
pub(crate) fn text_or_empty(name: &str, read: &FieldRead) -> String {
    match read {
        Ok(Some(text)) => text.clone(),
        Ok(None) => String::new(),
        Err(err) => {
            log::debug!("Reading {} failed: {}", name, err);
            String::new()
        }
    }
}
