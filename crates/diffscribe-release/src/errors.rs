// Copyright 2026 Oxide Computer Company

//! Error types for release metadata parsing.

use thiserror::Error;

/// An error that occurs while parsing a [`Checksum`](crate::Checksum).
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ChecksumParseError {
    /// The checksum has an invalid length.
    #[error("invalid length: expected 64 hex characters (SHA-256), got {0}")]
    InvalidLength(usize),

    /// The checksum is not valid hexadecimal.
    #[error("invalid hexadecimal")]
    InvalidHex(hex::FromHexError),
}

/// An error that occurs while parsing a [`Platform`](crate::Platform).
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum PlatformParseError {
    /// The platform string is not one of the shipped release targets.
    #[error(
        "unknown platform {0:?} \
         (expected \"darwin-arm64\" or \"darwin-x86_64\")"
    )]
    Unknown(String),
}
