//! Invest API Protocol Buffer definitions
//!
//! This crate contains the generated message types and gRPC clients for the
//! order placement services of the Invest API contract. The sources under
//! `src/generated` are checked in as emitted by `tonic-prost-build` so that
//! downstream builds do not need `protoc`.
//!
//! The bindings track the published SDK, which does not carry the
//! `confirm_margin_trade` request field. Do not add it here; the client crate
//! transmits it through a runtime-compiled schema instead.

/// Invest API contract, version 1
#[allow(missing_docs)]
#[allow(missing_debug_implementations)]
#[allow(clippy::all)]
pub mod contract {
    pub mod v1 {
        include!("generated/tinkoff.public.invest.api.contract.v1.rs");
    }
}

/// Fully-qualified gRPC method paths of the order placement RPCs
pub mod methods {
    /// `OrdersService.PostOrder`
    pub const POST_ORDER: &str = "/tinkoff.public.invest.api.contract.v1.OrdersService/PostOrder";
    /// `StopOrdersService.PostStopOrder`
    pub const POST_STOP_ORDER: &str =
        "/tinkoff.public.invest.api.contract.v1.StopOrdersService/PostStopOrder";
}

// Re-export commonly used types
pub use contract::v1::{
    OrderDirection, OrderType, PostOrderRequest, PostOrderResponse, PostStopOrderRequest,
    PostStopOrderResponse, Quotation, StopOrderDirection, StopOrderExpirationType,
    StopOrderType, orders_service_client::OrdersServiceClient,
    stop_orders_service_client::StopOrdersServiceClient,
};

pub use prost_types::Timestamp;
