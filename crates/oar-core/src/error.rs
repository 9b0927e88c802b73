use thiserror::Error;

pub type OarResult<T> = Result<T, OarError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OarError {
    #[error("Invalid parameter: {what} = {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid state: {what}")]
    InvalidState { what: &'static str },
}

impl OarError {
    /// True for errors raised while validating construction parameters.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, OarError::InvalidParameter { .. })
    }
}
