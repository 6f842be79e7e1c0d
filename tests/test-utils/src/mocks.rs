//! In-memory fakes for the client's call boundaries

use async_trait::async_trait;
use invest_client::{OrdersApi, RawInvoker, StopOrdersApi};
use invest_proto::{
    PostOrderRequest, PostOrderResponse, PostStopOrderRequest, PostStopOrderResponse,
};
use prost_reflect::DynamicMessage;
use std::sync::Arc;
use tokio::sync::Mutex;
use tonic::metadata::{AsciiMetadataValue, MetadataMap};
use tonic::{Code, Request, Response, Status};

/// One call observed by a fake
#[derive(Debug, Clone)]
pub struct RecordedCall<Req> {
    /// Method path for raw calls; `None` for typed calls
    pub method: Option<&'static str>,
    /// Request metadata as sent
    pub metadata: MetadataMap,
    /// Request message as sent
    pub message: Req,
}

#[derive(Debug, Clone)]
enum Reply<Resp> {
    Success { message: Resp, header: MetadataMap },
    Failure { code: Code, message: String, trailers: MetadataMap },
}

/// Scripted unary endpoint recording every request it receives.
///
/// Implements the typed boundaries for the generated request types and the
/// raw boundary for dynamic requests.
#[derive(Debug, Clone)]
pub struct FakeUnary<Req, Resp> {
    calls: Arc<Mutex<Vec<RecordedCall<Req>>>>,
    reply: Arc<Mutex<Reply<Resp>>>,
}

/// Fake typed `OrdersService`
pub type FakeOrdersApi = FakeUnary<PostOrderRequest, PostOrderResponse>;
/// Fake typed `StopOrdersService`
pub type FakeStopOrdersApi = FakeUnary<PostStopOrderRequest, PostStopOrderResponse>;
/// Fake raw invoker decoding into `Resp`
pub type FakeInvoker<Resp> = FakeUnary<DynamicMessage, Resp>;

impl<Req, Resp> FakeUnary<Req, Resp>
where
    Req: Clone + Send + 'static,
    Resp: Clone + Send + 'static,
{
    /// Endpoint answering every call with `message`
    pub fn replying(message: Resp) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(Reply::Success {
                message,
                header: MetadataMap::new(),
            })),
        }
    }

    /// Endpoint failing every call with `code`
    pub fn failing(code: Code, message: &str) -> Self {
        Self::failing_with_trailers(code, message, MetadataMap::new())
    }

    /// Endpoint failing every call with `code` and `trailers`
    pub fn failing_with_trailers(code: Code, message: &str, trailers: MetadataMap) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(Reply::Failure {
                code,
                message: message.to_string(),
                trailers,
            })),
        }
    }

    /// Add a response header to successful replies
    pub async fn with_header(self, key: &'static str, value: &str) -> Self {
        if let Reply::Success { header, .. } = &mut *self.reply.lock().await {
            if let Ok(value) = value.parse::<AsciiMetadataValue>() {
                header.insert(key, value);
            }
        }
        self
    }

    /// Every request received so far
    pub async fn calls(&self) -> Vec<RecordedCall<Req>> {
        self.calls.lock().await.clone()
    }

    /// Number of requests received so far
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    async fn respond(
        &self,
        method: Option<&'static str>,
        request: Request<Req>,
    ) -> Result<Response<Resp>, Status> {
        let (metadata, _, message) = request.into_parts();
        self.calls.lock().await.push(RecordedCall {
            method,
            metadata,
            message,
        });

        match &*self.reply.lock().await {
            Reply::Success { message, header } => {
                let mut response = Response::new(message.clone());
                *response.metadata_mut() = header.clone();
                Ok(response)
            }
            Reply::Failure {
                code,
                message,
                trailers,
            } => Err(Status::with_metadata(*code, message.clone(), trailers.clone())),
        }
    }
}

#[async_trait]
impl OrdersApi for FakeOrdersApi {
    async fn post_order(
        &self,
        request: Request<PostOrderRequest>,
    ) -> Result<Response<PostOrderResponse>, Status> {
        self.respond(None, request).await
    }
}

#[async_trait]
impl StopOrdersApi for FakeStopOrdersApi {
    async fn post_stop_order(
        &self,
        request: Request<PostStopOrderRequest>,
    ) -> Result<Response<PostStopOrderResponse>, Status> {
        self.respond(None, request).await
    }
}

#[async_trait]
impl<Resp> RawInvoker<Resp> for FakeInvoker<Resp>
where
    Resp: Clone + Send + Sync + 'static,
{
    async fn invoke(
        &self,
        method: &'static str,
        request: Request<DynamicMessage>,
    ) -> Result<Response<Resp>, Status> {
        self.respond(Some(method), request).await
    }
}
