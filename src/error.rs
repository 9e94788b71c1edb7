use std::fmt;

/// Errors raised at the boundary between the page and the panel core.
///
/// None of these is fatal: the front-end logs them and keeps the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    UnknownControl(String),
    InvalidOptions(String),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::UnknownControl(element) => {
                write!(f, "Element '{}' is not bound to any settings control", element)
            }
            PanelError::InvalidOptions(reason) => write!(f, "Invalid panel options: {}", reason),
        }
    }
}

impl std::error::Error for PanelError {}
