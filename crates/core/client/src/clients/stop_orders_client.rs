//! Stop-orders service client with margin-trade confirmation routing

use super::{RequestMetadata, log_confirm_flag, split_response, to_timestamp};
use crate::dynamic::{self, ConfirmableRequest, FieldValue, FieldWriter, RequestKind};
use crate::error::{BuildError, ClientResult};
use crate::schema::SchemaRegistry;
use crate::transport::{RawInvoker, StopOrdersApi};
use chrono::{DateTime, Utc};
use invest_proto::{Quotation, StopOrderDirection, StopOrderExpirationType, StopOrderType};
use std::sync::Arc;
use tonic::metadata::MetadataMap;
use tracing::{debug, info};

/// Stop-order placement request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostStopOrderRequest {
    /// Figi or instrument uid
    pub instrument_id: String,
    /// Quantity in lots
    pub quantity: i64,
    /// Execution price per instrument
    pub price: Option<Quotation>,
    /// Activation price per instrument
    pub stop_price: Option<Quotation>,
    /// Operation direction
    pub direction: StopOrderDirection,
    /// Account number
    pub account_id: String,
    /// Expiration type
    pub expiration_type: StopOrderExpirationType,
    /// Stop-order type
    pub stop_order_type: StopOrderType,
    /// Expiry for good-till-date orders
    pub expire_date: Option<DateTime<Utc>>,
    /// Confirm a margin trade; routes the call through the runtime schema
    pub confirm_margin_trade: bool,
}

impl From<&PostStopOrderRequest> for invest_proto::PostStopOrderRequest {
    fn from(request: &PostStopOrderRequest) -> Self {
        Self {
            quantity: request.quantity,
            price: request.price,
            stop_price: request.stop_price,
            direction: request.direction as i32,
            account_id: request.account_id.clone(),
            expiration_type: request.expiration_type as i32,
            stop_order_type: request.stop_order_type as i32,
            expire_date: request.expire_date.as_ref().map(to_timestamp),
            instrument_id: request.instrument_id.clone(),
            ..Default::default()
        }
    }
}

impl ConfirmableRequest for PostStopOrderRequest {
    const KIND: RequestKind = RequestKind::PostStopOrder;

    fn write_fields(&self, writer: &mut FieldWriter<'_>) -> Result<(), BuildError> {
        writer.set("instrument_id", FieldValue::Str(self.instrument_id.clone()))?;
        writer.set("quantity", FieldValue::I64(self.quantity))?;
        writer.set("direction", FieldValue::Enum(self.direction as i32))?;
        writer.set("account_id", FieldValue::Str(self.account_id.clone()))?;
        writer.set("expiration_type", FieldValue::Enum(self.expiration_type as i32))?;
        writer.set("stop_order_type", FieldValue::Enum(self.stop_order_type as i32))?;
        writer.quotation("stop_price", self.stop_price.as_ref())?;
        writer.quotation("price", self.price.as_ref())?;
        let expire_date = self.expire_date.as_ref().map(to_timestamp);
        writer.timestamp("expire_date", expire_date.as_ref())
    }
}

/// Stop-order placement result
#[derive(Debug, Clone)]
pub struct PostStopOrderResponse {
    /// Server response
    pub response: invest_proto::PostStopOrderResponse,
    /// Response header metadata
    pub header: MetadataMap,
}

/// `StopOrdersService` client, routed like [`super::OrdersClient`]
#[derive(Clone)]
pub struct StopOrdersClient {
    api: Arc<dyn StopOrdersApi>,
    invoker: Arc<dyn RawInvoker<invest_proto::PostStopOrderResponse>>,
    registry: Arc<SchemaRegistry>,
    metadata: RequestMetadata,
}

impl std::fmt::Debug for StopOrdersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopOrdersClient")
            .field("registry", &self.registry)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl StopOrdersClient {
    /// Client over explicit call boundaries and a shared schema registry
    pub fn new(
        api: Arc<dyn StopOrdersApi>,
        invoker: Arc<dyn RawInvoker<invest_proto::PostStopOrderResponse>>,
        registry: Arc<SchemaRegistry>,
    ) -> Self {
        Self {
            api,
            invoker,
            registry,
            metadata: RequestMetadata::default(),
        }
    }

    /// Attach `metadata` to every request
    #[must_use]
    pub fn with_metadata(mut self, metadata: RequestMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Place a stop order
    pub async fn post_stop_order(
        &self,
        request: &PostStopOrderRequest,
    ) -> ClientResult<PostStopOrderResponse> {
        let outcome = if request.confirm_margin_trade {
            info!(
                "PostStopOrder: confirm_margin_trade=true (dynamic invoke) instrument_id={} account_id={} direction={:?} qty={} stop_order_type={:?}",
                request.instrument_id,
                request.account_id,
                request.direction,
                request.quantity,
                request.stop_order_type
            );
            let message = dynamic::build(&self.registry, request)?;
            log_confirm_flag("PostStopOrder", &message);
            self.invoker
                .invoke(
                    RequestKind::PostStopOrder.method(),
                    self.metadata.request(message)?,
                )
                .await
        } else {
            debug!("PostStopOrder: typed invoke instrument_id={}", request.instrument_id);
            let message = invest_proto::PostStopOrderRequest::from(request);
            self.api.post_stop_order(self.metadata.request(message)?).await
        };

        let (header, response) = split_response("PostStopOrder", outcome)?;
        Ok(PostStopOrderResponse { response, header })
    }

    /// Registry used for confirmed stop orders
    pub fn registry(&self) -> &Arc<SchemaRegistry> {
        &self.registry
    }
}
