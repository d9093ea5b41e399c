use thiserror::Error;

/// Errors raised while building a border. Queries on a built border do not fail.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderError {
    #[error("a border needs at least one point")]
    Empty,
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("{len} points exceed the configured maximum of {max}")]
    TooManyPoints { len: usize, max: usize },
}
