//! Pinned wire layout of every field the dynamic builder writes

use crate::error::SchemaError;
use prost_reflect::DescriptorPool;

use super::{POST_ORDER_REQUEST, POST_STOP_ORDER_REQUEST, QUOTATION};

const TIMESTAMP: &str = "google.protobuf.Timestamp";

/// `(message, field, number)` as published by the upstream contract
pub const PINNED_FIELDS: &[(&str, &str, u32)] = &[
    (QUOTATION, "units", 1),
    (QUOTATION, "nano", 2),
    (TIMESTAMP, "seconds", 1),
    (TIMESTAMP, "nanos", 2),
    (POST_ORDER_REQUEST, "quantity", 2),
    (POST_ORDER_REQUEST, "price", 3),
    (POST_ORDER_REQUEST, "direction", 4),
    (POST_ORDER_REQUEST, "account_id", 5),
    (POST_ORDER_REQUEST, "order_type", 6),
    (POST_ORDER_REQUEST, "order_id", 7),
    (POST_ORDER_REQUEST, "instrument_id", 8),
    (POST_ORDER_REQUEST, "confirm_margin_trade", 9),
    (POST_STOP_ORDER_REQUEST, "quantity", 2),
    (POST_STOP_ORDER_REQUEST, "price", 3),
    (POST_STOP_ORDER_REQUEST, "stop_price", 4),
    (POST_STOP_ORDER_REQUEST, "direction", 5),
    (POST_STOP_ORDER_REQUEST, "account_id", 6),
    (POST_STOP_ORDER_REQUEST, "expiration_type", 7),
    (POST_STOP_ORDER_REQUEST, "stop_order_type", 8),
    (POST_STOP_ORDER_REQUEST, "expire_date", 9),
    (POST_STOP_ORDER_REQUEST, "instrument_id", 10),
    (POST_STOP_ORDER_REQUEST, "confirm_margin_trade", 11),
];

/// Compare the compiled pool against [`PINNED_FIELDS`], reporting the first mismatch
pub(crate) fn verify(pool: &DescriptorPool) -> Result<(), SchemaError> {
    for &(message, field, expected) in PINNED_FIELDS {
        let descriptor = pool
            .get_message_by_name(message)
            .ok_or_else(|| SchemaError::MissingMessage {
                name: message.to_string(),
            })?;
        let found = descriptor
            .get_field_by_name(field)
            .ok_or_else(|| SchemaError::MissingField {
                message: message.to_string(),
                field: field.to_string(),
            })?
            .number();
        if found != expected {
            return Err(SchemaError::FieldDrift {
                message: message.to_string(),
                field: field.to_string(),
                expected,
                found,
            });
        }
    }
    Ok(())
}
