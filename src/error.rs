#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FlashError {
    #[error("{value} ms does not fit in 8 bits")]
    OutOfRange { value: u16 },
    #[error("unknown drum: {0}")]
    UnknownDrum(String),
}
