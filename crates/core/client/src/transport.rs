//! Call boundaries used by the order placement clients
//!
//! The typed boundary is the generated client; the raw boundary sends a
//! reflective request to a literal method path and decodes the reply into a
//! generated response type.

use async_trait::async_trait;
use invest_proto::{
    OrdersServiceClient, PostOrderRequest, PostOrderResponse, PostStopOrderRequest,
    PostStopOrderResponse, StopOrdersServiceClient,
};
use prost_reflect::DynamicMessage;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};
use tonic_prost::ProstCodec;

/// Typed `OrdersService` calls
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// `OrdersService.PostOrder`
    async fn post_order(
        &self,
        request: Request<PostOrderRequest>,
    ) -> Result<Response<PostOrderResponse>, Status>;
}

/// Typed `StopOrdersService` calls
#[async_trait]
pub trait StopOrdersApi: Send + Sync {
    /// `StopOrdersService.PostStopOrder`
    async fn post_stop_order(
        &self,
        request: Request<PostStopOrderRequest>,
    ) -> Result<Response<PostStopOrderResponse>, Status>;
}

/// Unary call with a reflective request, decoded into `Resp`
#[async_trait]
pub trait RawInvoker<Resp>: Send + Sync {
    /// Send `request` to `method` (`/<service>/<method>`)
    async fn invoke(
        &self,
        method: &'static str,
        request: Request<DynamicMessage>,
    ) -> Result<Response<Resp>, Status>;
}

#[async_trait]
impl OrdersApi for OrdersServiceClient<Channel> {
    async fn post_order(
        &self,
        request: Request<PostOrderRequest>,
    ) -> Result<Response<PostOrderResponse>, Status> {
        let mut client = self.clone();
        OrdersServiceClient::post_order(&mut client, request).await
    }
}

#[async_trait]
impl StopOrdersApi for StopOrdersServiceClient<Channel> {
    async fn post_stop_order(
        &self,
        request: Request<PostStopOrderRequest>,
    ) -> Result<Response<PostStopOrderResponse>, Status> {
        let mut client = self.clone();
        StopOrdersServiceClient::post_stop_order(&mut client, request).await
    }
}

/// Raw unary calls over a tonic channel
#[derive(Debug, Clone)]
pub struct ChannelInvoker {
    channel: Channel,
}

impl ChannelInvoker {
    /// Invoker sharing `channel`
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl<Resp> RawInvoker<Resp> for ChannelInvoker
where
    Resp: prost::Message + Default + 'static,
{
    async fn invoke(
        &self,
        method: &'static str,
        request: Request<DynamicMessage>,
    ) -> Result<Response<Resp>, Status> {
        let mut grpc = tonic::client::Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("Service was not ready: {e}")))?;
        let codec = ProstCodec::<DynamicMessage, Resp>::default();
        grpc.unary(request, PathAndQuery::from_static(method), codec)
            .await
    }
}
