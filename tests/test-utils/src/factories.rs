//! Factories for generating order requests

use chrono::{DateTime, Duration, TimeZone, Utc};
use invest_client::{PostOrderRequest, PostStopOrderRequest};
use invest_proto::{
    OrderDirection, OrderType, Quotation, StopOrderDirection, StopOrderExpirationType,
    StopOrderType,
};

/// Builder for order placement requests
#[derive(Debug, Clone)]
pub struct OrderRequestFactory {
    instrument_id: String,
    account_id: String,
    confirm_margin_trade: bool,
}

impl Default for OrderRequestFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRequestFactory {
    /// Factory for unconfirmed orders on a default instrument and account
    pub fn new() -> Self {
        Self {
            instrument_id: "TCS00A106YF0".to_string(),
            account_id: "2000123456".to_string(),
            confirm_margin_trade: false,
        }
    }

    /// Use `instrument_id` for built requests
    pub fn with_instrument(mut self, instrument_id: impl Into<String>) -> Self {
        self.instrument_id = instrument_id.into();
        self
    }

    /// Use `account_id` for built requests
    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    /// Set the confirmation flag on built requests
    pub fn confirmed(mut self, confirm: bool) -> Self {
        self.confirm_margin_trade = confirm;
        self
    }

    /// Limit order for `quantity` lots at `price`
    pub fn limit(&self, quantity: i64, price: Quotation) -> PostOrderRequest {
        PostOrderRequest {
            instrument_id: self.instrument_id.clone(),
            quantity,
            price: Some(price),
            direction: OrderDirection::Buy,
            account_id: self.account_id.clone(),
            order_type: OrderType::Limit,
            order_id: format!("{}-{quantity}", self.instrument_id),
            confirm_margin_trade: self.confirm_margin_trade,
        }
    }

    /// Market order for `quantity` lots
    pub fn market(&self, quantity: i64) -> PostOrderRequest {
        PostOrderRequest {
            price: None,
            order_type: OrderType::Market,
            direction: OrderDirection::Sell,
            ..self.limit(quantity, Quotation::default())
        }
    }

    /// Requests covering empty, zero, negative and extreme field values
    pub fn edge_batch(&self) -> Vec<PostOrderRequest> {
        vec![
            self.limit(1, Quotation { units: 0, nano: 1 }),
            self.limit(0, Quotation { units: 12, nano: 0 }),
            self.limit(i64::MAX, Quotation { units: -3, nano: -250_000_000 }),
            self.market(7),
            PostOrderRequest {
                instrument_id: String::new(),
                account_id: String::new(),
                order_id: String::new(),
                direction: OrderDirection::Unspecified,
                order_type: OrderType::Unspecified,
                ..self.market(0)
            },
        ]
    }

    /// Good-till-date stop order expiring `days` after a fixed instant
    pub fn stop_till_date(&self, days: i64) -> PostStopOrderRequest {
        PostStopOrderRequest {
            instrument_id: self.instrument_id.clone(),
            quantity: 2,
            price: Some(Quotation {
                units: 310,
                nano: 500_000_000,
            }),
            stop_price: Some(Quotation { units: 300, nano: 0 }),
            direction: StopOrderDirection::Buy,
            account_id: self.account_id.clone(),
            expiration_type: StopOrderExpirationType::GoodTillDate,
            stop_order_type: StopOrderType::StopLimit,
            expire_date: Some(base_instant() + Duration::days(days)),
            confirm_margin_trade: self.confirm_margin_trade,
        }
    }
}

fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 7, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
