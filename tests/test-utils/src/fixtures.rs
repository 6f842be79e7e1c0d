//! Test fixtures for common test data

use crate::mocks::{FakeInvoker, FakeOrdersApi, FakeStopOrdersApi};
use invest_client::{
    OrdersClient, PostOrderRequest, PostStopOrderRequest, SchemaRegistry, StopOrdersClient,
};
use invest_proto::{
    OrderDirection, OrderType, Quotation, StopOrderDirection, StopOrderExpirationType,
    StopOrderType,
};
use rstest::*;
use std::sync::Arc;

/// Order id the fake orders service answers with
pub const FAKE_ORDER_ID: &str = "R-1001";
/// Stop-order id the fake stop-orders service answers with
pub const FAKE_STOP_ORDER_ID: &str = "S-2001";

/// Orders client wired to fakes on both call paths
#[derive(Debug)]
pub struct OrdersHarness {
    /// Client under test
    pub client: OrdersClient,
    /// Typed path
    pub api: Arc<FakeOrdersApi>,
    /// Dynamic path
    pub invoker: Arc<FakeInvoker<invest_proto::PostOrderResponse>>,
    /// Registry shared with the client
    pub registry: Arc<SchemaRegistry>,
}

impl OrdersHarness {
    /// Harness over `registry`, both paths answering successfully
    pub fn new(registry: SchemaRegistry) -> Self {
        let reply = invest_proto::PostOrderResponse {
            order_id: FAKE_ORDER_ID.to_string(),
        };
        Self::with_fakes(
            registry,
            FakeOrdersApi::replying(reply.clone()),
            FakeInvoker::replying(reply),
        )
    }

    /// Harness over explicit fakes
    pub fn with_fakes(
        registry: SchemaRegistry,
        api: FakeOrdersApi,
        invoker: FakeInvoker<invest_proto::PostOrderResponse>,
    ) -> Self {
        let api = Arc::new(api);
        let invoker = Arc::new(invoker);
        let registry = Arc::new(registry);
        let client = OrdersClient::new(api.clone(), invoker.clone(), Arc::clone(&registry));
        Self {
            client,
            api,
            invoker,
            registry,
        }
    }
}

/// Stop-orders client wired to fakes on both call paths
#[derive(Debug)]
pub struct StopOrdersHarness {
    /// Client under test
    pub client: StopOrdersClient,
    /// Typed path
    pub api: Arc<FakeStopOrdersApi>,
    /// Dynamic path
    pub invoker: Arc<FakeInvoker<invest_proto::PostStopOrderResponse>>,
    /// Registry shared with the client
    pub registry: Arc<SchemaRegistry>,
}

impl StopOrdersHarness {
    /// Harness over `registry`, both paths answering successfully
    pub fn new(registry: SchemaRegistry) -> Self {
        let reply = invest_proto::PostStopOrderResponse {
            stop_order_id: FAKE_STOP_ORDER_ID.to_string(),
        };
        Self::with_fakes(
            registry,
            FakeStopOrdersApi::replying(reply.clone()),
            FakeInvoker::replying(reply),
        )
    }

    /// Harness over explicit fakes
    pub fn with_fakes(
        registry: SchemaRegistry,
        api: FakeStopOrdersApi,
        invoker: FakeInvoker<invest_proto::PostStopOrderResponse>,
    ) -> Self {
        let api = Arc::new(api);
        let invoker = Arc::new(invoker);
        let registry = Arc::new(registry);
        let client = StopOrdersClient::new(api.clone(), invoker.clone(), Arc::clone(&registry));
        Self {
            client,
            api,
            invoker,
            registry,
        }
    }
}

/// Orders harness over the embedded schema
#[fixture]
pub fn orders_harness() -> OrdersHarness {
    OrdersHarness::new(SchemaRegistry::embedded())
}

/// Stop-orders harness over the embedded schema
#[fixture]
pub fn stop_orders_harness() -> StopOrdersHarness {
    StopOrdersHarness::new(SchemaRegistry::embedded())
}

/// Limit buy order without margin confirmation
#[fixture]
pub fn limit_order() -> PostOrderRequest {
    PostOrderRequest {
        instrument_id: "BBG004730N88".to_string(),
        quantity: 3,
        price: Some(Quotation {
            units: 271,
            nano: 450_000_000,
        }),
        direction: OrderDirection::Buy,
        account_id: "2000123456".to_string(),
        order_type: OrderType::Limit,
        order_id: "b7c1a2d4-0001".to_string(),
        confirm_margin_trade: false,
    }
}

/// Stop-loss futures order with margin confirmation
#[fixture]
pub fn fut1_stop_order() -> PostStopOrderRequest {
    PostStopOrderRequest {
        instrument_id: "FUT1".to_string(),
        quantity: 10,
        price: Some(Quotation { units: 100, nano: 0 }),
        stop_price: Some(Quotation { units: 95, nano: 0 }),
        direction: StopOrderDirection::Sell,
        account_id: "2000123456".to_string(),
        expiration_type: StopOrderExpirationType::GoodTillCancel,
        stop_order_type: StopOrderType::StopLoss,
        expire_date: None,
        confirm_margin_trade: true,
    }
}
