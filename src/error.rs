/*
    Errors
*/

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unsupported type: {0:?} (expected single, double or auto)")]
    UnsupportedType(String),

    #[error("not a number: {0:?}")]
    Parse(String),

    #[error("trailing characters in {literal:?} starting at byte {offset}")]
    TrailingCharacters { literal: String, offset: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}
