//! Error types for the order placement client

use thiserror::Error;
use tonic::metadata::MetadataMap;

/// Failures while compiling or checking the embedded schema.
///
/// Resolution outcomes are memoized and handed to every caller, so this
/// type is `Clone` and carries rendered messages rather than source errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Embedded schema text failed to parse
    #[error("parse embedded schema for confirm_margin_trade: {0}")]
    Parse(String),

    /// Parsed files could not be assembled into descriptors
    #[error("build descriptors for confirm_margin_trade: {0}")]
    Assemble(String),

    /// A message the client writes is absent from the compiled schema
    #[error("message {name} not found in embedded schema")]
    MissingMessage {
        /// Fully-qualified message name
        name: String,
    },

    /// A pinned field is absent from the compiled schema
    #[error("field {message}.{field} not found in embedded schema")]
    MissingField {
        /// Fully-qualified message name
        message: String,
        /// Field name
        field: String,
    },

    /// A pinned field carries a different number than the wire protocol
    #[error("field {message}.{field} has number {found}, expected {expected}")]
    FieldDrift {
        /// Fully-qualified message name
        message: String,
        /// Field name
        field: String,
        /// Number pinned for the upstream protocol
        expected: u32,
        /// Number found in the embedded schema
        found: u32,
    },
}

/// Failures while populating a dynamic request message
#[derive(Debug, Error)]
pub enum BuildError {
    /// Descriptors could not be resolved
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A structurally required field has no descriptor
    #[error("{message} fields not found in descriptor: {field}")]
    MissingField {
        /// Fully-qualified message name
        message: String,
        /// Field name
        field: String,
    },

    /// The schema declares a field kind that does not accept the value
    #[error("set {message}.{field}: {reason}")]
    FieldType {
        /// Fully-qualified message name
        message: String,
        /// Field name
        field: String,
        /// Rendered mismatch
        reason: String,
    },
}

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Dynamic request construction failed
    #[error("Build dynamic request failed: {0}")]
    Build(#[from] BuildError),

    /// The RPC failed; the status carries the trailer metadata
    #[error("RPC failed: {0}")]
    Transport(#[from] tonic::Status),

    /// Channel could not be established
    #[error("Connection failed: {0}")]
    Connection(#[from] tonic::transport::Error),

    /// Endpoint URI was rejected
    #[error("Invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint {
        /// Configured endpoint
        endpoint: String,
        /// Rendered parse error
        reason: String,
    },

    /// A configured value cannot be sent as request metadata
    #[error("Invalid metadata value for {key}")]
    InvalidMetadata {
        /// Metadata key
        key: &'static str,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Trailer metadata of a failed RPC.
    ///
    /// A failed call replaces the header metadata with the trailers, which
    /// may carry error detail appended after the headers were sent.
    pub fn metadata(&self) -> Option<&MetadataMap> {
        match self {
            Self::Transport(status) => Some(status.metadata()),
            _ => None,
        }
    }

    /// gRPC status code describing the failure
    pub fn code(&self) -> tonic::Code {
        match self {
            Self::Transport(status) => status.code(),
            Self::Connection(_) => tonic::Code::Unavailable,
            Self::InvalidEndpoint { .. } | Self::InvalidMetadata { .. } | Self::Config(_) => {
                tonic::Code::InvalidArgument
            }
            Self::Build(_) => tonic::Code::Internal,
        }
    }
}

/// Type alias for client results
pub type ClientResult<T> = Result<T, ClientError>;
