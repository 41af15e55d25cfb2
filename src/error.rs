use core::convert::Infallible;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    #[cfg(not(feature = "host"))]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    #[display("No free PIO state machine in the primary or fallback pool")]
    NoFreeStateMachine,

    #[display("LED index {index} is out of bounds for {len} LEDs")]
    IndexOutOfBounds { index: usize, len: usize },

    #[display("Position (row {row}, col {col}) is outside the {width}x{height} panel")]
    PositionOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[display("{value} is not a digit (0-9)")]
    DigitOutOfRange { value: u8 },

    #[display("Error reading or setting a pin")]
    PinState,
}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Self::PinState
    }
}

#[cfg(not(feature = "host"))]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}
