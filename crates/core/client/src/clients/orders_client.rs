//! Orders service client with margin-trade confirmation routing

use super::{RequestMetadata, log_confirm_flag, split_response};
use crate::dynamic::{self, ConfirmableRequest, FieldValue, FieldWriter, RequestKind};
use crate::error::{BuildError, ClientResult};
use crate::schema::SchemaRegistry;
use crate::transport::{OrdersApi, RawInvoker};
use invest_proto::{OrderDirection, OrderType, Quotation};
use std::sync::Arc;
use tonic::metadata::MetadataMap;
use tracing::{debug, info};

/// Order placement request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostOrderRequest {
    /// Figi or instrument uid
    pub instrument_id: String,
    /// Quantity in lots
    pub quantity: i64,
    /// Price per instrument; absent for market orders
    pub price: Option<Quotation>,
    /// Operation direction
    pub direction: OrderDirection,
    /// Account number
    pub account_id: String,
    /// Order type
    pub order_type: OrderType,
    /// Idempotency key
    pub order_id: String,
    /// Confirm a margin trade. The generated bindings cannot send this
    /// field, so setting it routes the call through the runtime schema.
    pub confirm_margin_trade: bool,
}

impl From<&PostOrderRequest> for invest_proto::PostOrderRequest {
    fn from(request: &PostOrderRequest) -> Self {
        Self {
            quantity: request.quantity,
            price: request.price,
            direction: request.direction as i32,
            account_id: request.account_id.clone(),
            order_type: request.order_type as i32,
            order_id: request.order_id.clone(),
            instrument_id: request.instrument_id.clone(),
            ..Default::default()
        }
    }
}

impl ConfirmableRequest for PostOrderRequest {
    const KIND: RequestKind = RequestKind::PostOrder;

    fn write_fields(&self, writer: &mut FieldWriter<'_>) -> Result<(), BuildError> {
        writer.set("instrument_id", FieldValue::Str(self.instrument_id.clone()))?;
        writer.set("quantity", FieldValue::I64(self.quantity))?;
        writer.set("direction", FieldValue::Enum(self.direction as i32))?;
        writer.set("account_id", FieldValue::Str(self.account_id.clone()))?;
        writer.set("order_type", FieldValue::Enum(self.order_type as i32))?;
        writer.set("order_id", FieldValue::Str(self.order_id.clone()))?;
        writer.quotation("price", self.price.as_ref())
    }
}

/// Order placement result
#[derive(Debug, Clone)]
pub struct PostOrderResponse {
    /// Server response
    pub response: invest_proto::PostOrderResponse,
    /// Response header metadata
    pub header: MetadataMap,
}

/// `OrdersService` client.
///
/// Requests with `confirm_margin_trade` unset go through the generated
/// client untouched. Requests with it set are rebuilt from the runtime
/// schema and sent as a raw unary call; there is no fallback between the
/// two paths.
#[derive(Clone)]
pub struct OrdersClient {
    api: Arc<dyn OrdersApi>,
    invoker: Arc<dyn RawInvoker<invest_proto::PostOrderResponse>>,
    registry: Arc<SchemaRegistry>,
    metadata: RequestMetadata,
}

impl std::fmt::Debug for OrdersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersClient")
            .field("registry", &self.registry)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl OrdersClient {
    /// Client over explicit call boundaries and a shared schema registry
    pub fn new(
        api: Arc<dyn OrdersApi>,
        invoker: Arc<dyn RawInvoker<invest_proto::PostOrderResponse>>,
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

    /// Place an order
    pub async fn post_order(&self, request: &PostOrderRequest) -> ClientResult<PostOrderResponse> {
        let outcome = if request.confirm_margin_trade {
            info!(
                "PostOrder: confirm_margin_trade=true (dynamic invoke) instrument_id={} account_id={} direction={:?} qty={} order_type={:?}",
                request.instrument_id,
                request.account_id,
                request.direction,
                request.quantity,
                request.order_type
            );
            let message = dynamic::build(&self.registry, request)?;
            log_confirm_flag("PostOrder", &message);
            self.invoker
                .invoke(RequestKind::PostOrder.method(), self.metadata.request(message)?)
                .await
        } else {
            debug!("PostOrder: typed invoke instrument_id={}", request.instrument_id);
            let message = invest_proto::PostOrderRequest::from(request);
            self.api.post_order(self.metadata.request(message)?).await
        };

        let (header, response) = split_response("PostOrder", outcome)?;
        Ok(PostOrderResponse { response, header })
    }

    /// Registry used for confirmed orders
    pub fn registry(&self) -> &Arc<SchemaRegistry> {
        &self.registry
    }
}
