//! Embedded copy of the schema subset that carries `confirm_margin_trade`
//!
//! Deployments ship the binary alone, without a source tree or module cache,
//! so the definitions live here as text and are never read from disk. Field
//! names and numbers must match the upstream contract exactly; a drift
//! corrupts the wire encoding silently. See [`super::layout`] for the pinned
//! numbers checked at start-up.

use super::SchemaSource;

/// Logical name of the timestamp definition
pub const TIMESTAMP_PROTO: &str = "google/protobuf/timestamp.proto";
/// Logical name of the shared quotation definition
pub const COMMON_PROTO: &str = "common.proto";
/// Logical name of the orders service definition
pub const ORDERS_PROTO: &str = "orders.proto";
/// Logical name of the stop-orders service definition
pub const STOP_ORDERS_PROTO: &str = "stoporders.proto";

const TIMESTAMP_SOURCE: &str = r#"syntax = "proto3";

package google.protobuf;

option go_package = "google.golang.org/protobuf/types/known/timestamppb";

message Timestamp {
  int64 seconds = 1;
  int32 nanos = 2;
}
"#;

const COMMON_SOURCE: &str = r#"syntax = "proto3";

package tinkoff.public.invest.api.contract.v1;

option go_package = "./;investapi";

message Quotation {
  int64 units = 1;
  int32 nano = 2;
}
"#;

const ORDERS_SOURCE: &str = r#"syntax = "proto3";

package tinkoff.public.invest.api.contract.v1;

option go_package = "./;investapi";

import "common.proto";

service OrdersService {
  rpc PostOrder(PostOrderRequest) returns (PostOrderResponse);
}

enum OrderDirection {
  ORDER_DIRECTION_UNSPECIFIED = 0;
  ORDER_DIRECTION_BUY = 1;
  ORDER_DIRECTION_SELL = 2;
}

enum OrderType {
  ORDER_TYPE_UNSPECIFIED = 0;
  ORDER_TYPE_LIMIT = 1;
  ORDER_TYPE_MARKET = 2;
  ORDER_TYPE_BESTPRICE = 3;
}

message PostOrderRequest {
  string figi = 1 [ deprecated = true ];
  int64 quantity = 2;
  Quotation price = 3;
  OrderDirection direction = 4;
  string account_id = 5;
  OrderType order_type = 6;
  string order_id = 7;
  string instrument_id = 8;
  bool confirm_margin_trade = 9;
}

message PostOrderResponse {
  string order_id = 1;
}
"#;

const STOP_ORDERS_SOURCE: &str = r#"syntax = "proto3";

package tinkoff.public.invest.api.contract.v1;

option go_package = "./;investapi";

import "google/protobuf/timestamp.proto";
import "common.proto";

service StopOrdersService {
  rpc PostStopOrder(PostStopOrderRequest) returns (PostStopOrderResponse);
}

enum StopOrderDirection {
  STOP_ORDER_DIRECTION_UNSPECIFIED = 0;
  STOP_ORDER_DIRECTION_BUY = 1;
  STOP_ORDER_DIRECTION_SELL = 2;
}

enum StopOrderExpirationType {
  STOP_ORDER_EXPIRATION_TYPE_UNSPECIFIED = 0;
  STOP_ORDER_EXPIRATION_TYPE_GOOD_TILL_CANCEL = 1;
  STOP_ORDER_EXPIRATION_TYPE_GOOD_TILL_DATE = 2;
}

enum StopOrderType {
  STOP_ORDER_TYPE_UNSPECIFIED = 0;
  STOP_ORDER_TYPE_TAKE_PROFIT = 1;
  STOP_ORDER_TYPE_STOP_LOSS = 2;
  STOP_ORDER_TYPE_STOP_LIMIT = 3;
}

message PostStopOrderRequest {
  string figi = 1 [ deprecated = true ];
  int64 quantity = 2;
  Quotation price = 3;
  Quotation stop_price = 4;
  StopOrderDirection direction = 5;
  string account_id = 6;
  StopOrderExpirationType expiration_type = 7;
  StopOrderType stop_order_type = 8;
  google.protobuf.Timestamp expire_date = 9;
  string instrument_id = 10;
  bool confirm_margin_trade = 11;
}

message PostStopOrderResponse {
  string stop_order_id = 1;
}
"#;

/// Files compiled by the registry, dependencies first
const FILES: [(&str, &str); 4] = [
    (TIMESTAMP_PROTO, TIMESTAMP_SOURCE),
    (COMMON_PROTO, COMMON_SOURCE),
    (STOP_ORDERS_PROTO, STOP_ORDERS_SOURCE),
    (ORDERS_PROTO, ORDERS_SOURCE),
];

/// Schema source backed by the text compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSchema;

impl SchemaSource for EmbeddedSchema {
    fn entry_files(&self) -> Vec<&str> {
        FILES.iter().map(|(name, _)| *name).collect()
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        FILES
            .iter()
            .find(|(file, _)| *file == name)
            .map(|(_, source)| *source)
    }
}
