use thiserror::Error;

/// Errors that can occur while building bookings or moving stock.
///
/// Messages are free text meant for direct display next to the form that
/// produced them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GodownError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Bill or challan number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Not enough stock, or unknown stock item.
    #[error("stock error: {0}")]
    Stock(String),

    /// Ledger bookkeeping error (e.g. a non-positive payment).
    #[error("ledger error: {0}")]
    Ledger(String),

    /// Spreadsheet export error.
    #[error("export error: {0}")]
    Export(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "customer.gstin", "items[2].product_name").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join validation errors into one displayable message.
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
