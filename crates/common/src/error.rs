#![allow(clippy::uninlined_format_args)]

//! Error related data structures to be shared and used.
//!
//! This module contains the [`Error`] enum, which is used to represent
//! errors that can occur within the pocketcore domain, together with a
//! coarse [`ErrorKind`] classification used by host-facing facades that
//! need to distinguish caller mistakes from internal failures.

use std::fmt::{self, Display, Formatter};
use std::io;

/// Top level enum for error handling within pocketcore.
///
/// Most of the time, you will want to use the `CustomError` variant
/// to provide a more detailed error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidData,
    RomSize,
    IncompatibleBootRom,
    InvalidParameter(String),
    CustomError(String),
}

/// Coarse classification of an [`Error`], mirroring the three-way
/// split a host facade needs to make: did the caller pass something
/// invalid, did a well-formed operation fail, or has the emulator hit
/// a condition it cannot recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    FailedOperation,
    Fatal,
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::InvalidData => String::from("Invalid data format"),
            Error::RomSize => String::from("Invalid ROM size"),
            Error::IncompatibleBootRom => String::from("Incompatible Boot ROM"),
            Error::InvalidParameter(message) => format!("Invalid parameter: {}", message),
            Error::CustomError(message) => String::from(message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidData | Error::RomSize | Error::InvalidParameter(_) => {
                ErrorKind::InvalidArgument
            }
            Error::IncompatibleBootRom => ErrorKind::FailedOperation,
            Error::CustomError(_) => ErrorKind::FailedOperation,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::CustomError(format!("I/O error: {error}"))
    }
}
