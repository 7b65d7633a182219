use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unknown ingredient: {0:?}")]
    UnknownIngredient(String),

    #[error("malformed quantity: {0:?}")]
    MalformedQuantity(String),

    #[error("incompatible units: {from:?} -> {to:?}")]
    IncompatibleUnits { from: String, to: String },
}
