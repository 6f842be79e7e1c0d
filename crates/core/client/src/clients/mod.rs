//! gRPC client wrappers for order placement

pub mod invest_client;
pub mod orders_client;
pub mod stop_orders_client;

pub use invest_client::InvestClient;
pub use orders_client::{OrdersClient, PostOrderRequest, PostOrderResponse};
pub use stop_orders_client::{PostStopOrderRequest, PostStopOrderResponse, StopOrdersClient};

use crate::config::ClientConfig;
use crate::dynamic::CONFIRM_MARGIN_TRADE;
use crate::error::{ClientError, ClientResult};
use chrono::{DateTime, Utc};
use invest_proto::Timestamp;
use prost_reflect::{DynamicMessage, ReflectMessage};
use tonic::metadata::{AsciiMetadataValue, MetadataMap};
use tonic::{Request, Response, Status};
use tracing::{debug, error, warn};

const AUTHORIZATION: &str = "authorization";
const APP_NAME: &str = "x-app-name";

/// Metadata attached to every outgoing request, on both call paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    token: Option<String>,
    app_name: Option<String>,
}

impl RequestMetadata {
    /// Metadata from a bearer token and an application name; empty values are ignored
    pub fn new(token: Option<String>, app_name: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            app_name: app_name.filter(|a| !a.is_empty()),
        }
    }

    /// Metadata configured for a client
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.token.clone(), config.app_name.clone())
    }

    /// Wrap `message` in a request carrying this metadata
    pub fn request<T>(&self, message: T) -> ClientResult<Request<T>> {
        let mut request = Request::new(message);
        if let Some(token) = &self.token {
            let value: AsciiMetadataValue = format!("Bearer {token}")
                .parse()
                .map_err(|_| ClientError::InvalidMetadata { key: AUTHORIZATION })?;
            request.metadata_mut().insert(AUTHORIZATION, value);
        }
        if let Some(app_name) = &self.app_name {
            let value: AsciiMetadataValue = app_name
                .parse()
                .map_err(|_| ClientError::InvalidMetadata { key: APP_NAME })?;
            request.metadata_mut().insert(APP_NAME, value);
        }
        Ok(request)
    }
}

/// Split a call outcome into header metadata and message.
///
/// Failures are returned as [`ClientError::Transport`]; the status keeps
/// the trailer metadata in place of the headers.
pub(crate) fn split_response<T>(
    method: &str,
    outcome: Result<Response<T>, Status>,
) -> ClientResult<(MetadataMap, T)> {
    match outcome {
        Ok(response) => {
            let (header, message, _) = response.into_parts();
            Ok((header, message))
        }
        Err(status) => {
            error!("{} failed: {:?} {}", method, status.code(), status.message());
            Err(ClientError::Transport(status))
        }
    }
}

/// Read the confirmation flag back from a built message
pub(crate) fn log_confirm_flag(method: &str, message: &DynamicMessage) {
    let descriptor = message.descriptor();
    match message.get_field_by_name(CONFIRM_MARGIN_TRADE) {
        Some(value) => debug!(
            "{}: dynamic field confirm_margin_trade={} message={}",
            method,
            value.as_bool().unwrap_or_default(),
            descriptor.full_name()
        ),
        None => warn!(
            "{}: dynamic field confirm_margin_trade NOT FOUND in message={}",
            method,
            descriptor.full_name()
        ),
    }
}

/// `google.protobuf.Timestamp` for a UTC instant
pub fn to_timestamp(time: &DateTime<Utc>) -> Timestamp {
    // Sub-second nanos stay below 2e9 even across a leap second
    #[allow(clippy::cast_possible_wrap)]
    let nanos = time.timestamp_subsec_nanos() as i32;
    Timestamp {
        seconds: time.timestamp(),
        nanos,
    }
}
