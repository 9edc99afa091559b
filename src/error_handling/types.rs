//! Error type definitions.
//!
//! This module defines the startup errors and the categories used to label
//! absorbed resolution failures.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{AsRefStr, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The overrides file could not be read.
    #[error("Failed to read overrides file {path}: {source}")]
    OverridesReadError {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The overrides file is not valid TOML or has the wrong shape.
    #[error("Failed to parse overrides file {path}: {source}")]
    OverridesParseError {
        /// Path that was requested
        path: PathBuf,
        /// Underlying parse failure
        source: toml::de::Error,
    },

    /// The listener could not be bound.
    #[error("Failed to bind {address}: {source}")]
    BindError {
        /// Address that was requested
        address: String,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}

/// Categories of network failures absorbed by the resolver.
///
/// These never reach API callers as errors. They label log lines and decide
/// the per-item `success` flag in batch responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, AsRefStr)]
pub enum ErrorType {
    HttpRequestBuilderError, // Usually an unparseable URL
    HttpRequestRedirectError, // Redirect loop or hop limit exceeded
    HttpRequestTimeoutError,
    HttpRequestConnectError, // DNS, TCP or TLS failure
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    TaskPanicked,
}

impl ErrorType {
    /// Short human-readable description used in log lines and API messages.
    pub fn description(self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "invalid URL",
            ErrorType::HttpRequestRedirectError => "redirect limit exceeded",
            ErrorType::HttpRequestTimeoutError => "request timed out",
            ErrorType::HttpRequestConnectError => "connection failed",
            ErrorType::HttpRequestRequestError => "request failed",
            ErrorType::HttpRequestBodyError => "response body error",
            ErrorType::HttpRequestDecodeError => "response decode error",
            ErrorType::HttpRequestOtherError => "network error",
            ErrorType::TaskPanicked => "internal error",
        }
    }
}
