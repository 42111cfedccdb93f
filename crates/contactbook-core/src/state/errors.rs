use crate::contacts::ContactError;
use crate::errors::ContactbookError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl ContactbookError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Contact(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Contact(e) => e.is_user_error(),
        }
    }
}
