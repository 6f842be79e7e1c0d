//! Invest API order placement client
//!
//! The published bindings for `PostOrderRequest` and `PostStopOrderRequest`
//! lack the `confirm_margin_trade` field the server accepts. This crate
//! lets callers set it anyway:
//!
//! - [`schema`]: an embedded copy of the affected schema subset, compiled
//!   once into reflective descriptors
//! - [`dynamic`]: a descriptor-driven builder producing wire-compatible
//!   requests with the confirmation field set
//! - [`clients`]: per-RPC routing between the generated typed client and a
//!   raw unary call carrying the dynamic request
//!
//! Requests without the flag never touch the runtime schema.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod clients;
pub mod config;
pub mod dynamic;
pub mod error;
pub mod logging;
pub mod schema;
pub mod transport;

pub use clients::*;
pub use config::ClientConfig;
pub use error::{BuildError, ClientError, ClientResult, SchemaError};
pub use schema::{ConfirmDescriptors, EmbeddedSchema, SchemaRegistry, SchemaSource};
pub use transport::{ChannelInvoker, OrdersApi, RawInvoker, StopOrdersApi};
