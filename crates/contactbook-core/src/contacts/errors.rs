use crate::errors::ContactbookError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("No contact at position {index} (list has {len} contacts)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl ContactbookError for ContactError {
    fn error_code(&self) -> &'static str {
        match self {
            ContactError::IndexOutOfRange { .. } => "CONTACT_INDEX_OUT_OF_RANGE",
        }
    }

    fn is_user_error(&self) -> bool {
        // Exhaustive match ensures new variants force an explicit classification.
        match self {
            ContactError::IndexOutOfRange { .. } => true,
        }
    }
}
