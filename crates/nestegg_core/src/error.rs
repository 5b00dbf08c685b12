use std::fmt;

/// Errors from reading a calendar month out of its `YYYY-MM` text form.
#[derive(Debug)]
pub enum MonthError {
    /// The text was not shaped like `YYYY-MM`.
    Format(String),
    /// The year or month fell outside the supported calendar range.
    OutOfRange(jiff::Error),
}

impl fmt::Display for MonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthError::Format(input) => write!(f, "expected YYYY-MM, got {input:?}"),
            MonthError::OutOfRange(e) => write!(f, "month out of range: {e}"),
        }
    }
}

impl std::error::Error for MonthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MonthError::OutOfRange(e) => Some(e),
            MonthError::Format(_) => None,
        }
    }
}

impl From<jiff::Error> for MonthError {
    fn from(e: jiff::Error) -> Self {
        MonthError::OutOfRange(e)
    }
}
