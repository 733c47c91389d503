use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must not be empty")]
pub struct EmptyField {
    pub field: &'static str,
}

/// Accepts `value` only when it holds something other than whitespace.
pub fn require_non_empty(field: &'static str, value: String) -> Result<String, EmptyField> {
    if value.trim().is_empty() {
        return Err(EmptyField { field });
    }
    Ok(value)
}
