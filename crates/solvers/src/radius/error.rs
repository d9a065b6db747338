use hearth_core::HeatersError;
use thiserror::Error;

/// Errors that can occur during the radius search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("no heaters: no finite radius covers any house")]
    EmptyHeaters,
}

impl From<HeatersError> for Error {
    fn from(err: HeatersError) -> Self {
        match err {
            HeatersError::Empty => Self::EmptyHeaters,
        }
    }
}
