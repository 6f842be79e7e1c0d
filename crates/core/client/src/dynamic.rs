//! Descriptor-driven construction of requests carrying `confirm_margin_trade`
//!
//! Fields are written through [`FieldWriter::set`], a single table-driven
//! setter keyed by field name and a tagged [`FieldValue`]. Optional scalars
//! follow the proto3 convention that a default value is an absent value;
//! structurally required sub-message components are always written and
//! their absence from the schema is an error.

use crate::error::BuildError;
use crate::schema::{ConfirmDescriptors, SchemaRegistry};
use invest_proto::{Quotation, Timestamp, methods};
use prost_reflect::{DynamicMessage, Kind, MessageDescriptor, ReflectMessage, Value};

/// The field the generated bindings cannot carry
pub const CONFIRM_MARGIN_TRADE: &str = "confirm_margin_trade";

/// Request types rebuilt through the runtime schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `OrdersService.PostOrder`
    PostOrder,
    /// `StopOrdersService.PostStopOrder`
    PostStopOrder,
}

impl RequestKind {
    /// Request descriptor for this kind
    pub fn descriptor(self, descriptors: &ConfirmDescriptors) -> &MessageDescriptor {
        match self {
            Self::PostOrder => descriptors.post_order(),
            Self::PostStopOrder => descriptors.post_stop_order(),
        }
    }

    /// Fully-qualified RPC path the request is sent to
    pub fn method(self) -> &'static str {
        match self {
            Self::PostOrder => methods::POST_ORDER,
            Self::PostStopOrder => methods::POST_STOP_ORDER,
        }
    }
}

/// A single field write
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Written only when non-empty
    Str(String),
    /// Written only when non-zero
    I64(i64),
    /// Always written; zero is the meaningful `UNSPECIFIED` value
    Enum(i32),
    /// Always written
    Bool(bool),
    /// Always written
    Message(DynamicMessage),
}

impl FieldValue {
    fn is_implicit_default(&self) -> bool {
        match self {
            Self::Str(value) => value.is_empty(),
            Self::I64(value) => *value == 0,
            Self::Enum(_) | Self::Bool(_) | Self::Message(_) => false,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::Str(value) => Value::String(value),
            Self::I64(value) => Value::I64(value),
            Self::Enum(value) => Value::EnumNumber(value),
            Self::Bool(value) => Value::Bool(value),
            Self::Message(value) => Value::Message(value),
        }
    }
}

/// Populates one dynamic message from a typed request
#[derive(Debug)]
pub struct FieldWriter<'a> {
    message: DynamicMessage,
    descriptors: &'a ConfirmDescriptors,
}

impl<'a> FieldWriter<'a> {
    fn new(kind: RequestKind, descriptors: &'a ConfirmDescriptors) -> Self {
        Self {
            message: DynamicMessage::new(kind.descriptor(descriptors).clone()),
            descriptors,
        }
    }

    /// Write an optional field.
    ///
    /// Implicit defaults are not written. A name the schema does not know is
    /// skipped; older schema revisions may lack optional fields.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), BuildError> {
        if value.is_implicit_default() {
            return Ok(());
        }
        let descriptor = self.message.descriptor();
        let Some(field) = descriptor.get_field_by_name(name) else {
            return Ok(());
        };
        self.message
            .try_set_field(&field, value.into_value())
            .map_err(|e| BuildError::FieldType {
                message: descriptor.full_name().to_string(),
                field: name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Write a quotation sub-message; `None` leaves the field absent
    pub fn quotation(&mut self, name: &str, quotation: Option<&Quotation>) -> Result<(), BuildError> {
        let Some(quotation) = quotation else {
            return Ok(());
        };
        let mut value = DynamicMessage::new(self.descriptors.quotation().clone());
        set_required(&mut value, "units", Value::I64(quotation.units))?;
        set_required(&mut value, "nano", Value::I32(quotation.nano))?;
        self.set(name, FieldValue::Message(value))
    }

    /// Write a `google.protobuf.Timestamp` sub-message; `None` leaves the field absent
    pub fn timestamp(&mut self, name: &str, timestamp: Option<&Timestamp>) -> Result<(), BuildError> {
        let Some(timestamp) = timestamp else {
            return Ok(());
        };
        let descriptor = self.message.descriptor();
        let Some(field) = descriptor.get_field_by_name(name) else {
            return Ok(());
        };
        let Kind::Message(timestamp_descriptor) = field.kind() else {
            return Err(BuildError::FieldType {
                message: descriptor.full_name().to_string(),
                field: name.to_string(),
                reason: format!("expected a message field, found {:?}", field.kind()),
            });
        };
        let mut value = DynamicMessage::new(timestamp_descriptor);
        set_required(&mut value, "seconds", Value::I64(timestamp.seconds))?;
        set_required(&mut value, "nanos", Value::I32(timestamp.nanos))?;
        self.set(name, FieldValue::Message(value))
    }
}

fn set_required(message: &mut DynamicMessage, name: &str, value: Value) -> Result<(), BuildError> {
    let descriptor = message.descriptor();
    let field = descriptor
        .get_field_by_name(name)
        .ok_or_else(|| BuildError::MissingField {
            message: descriptor.full_name().to_string(),
            field: name.to_string(),
        })?;
    message
        .try_set_field(&field, value)
        .map_err(|e| BuildError::FieldType {
            message: descriptor.full_name().to_string(),
            field: name.to_string(),
            reason: e.to_string(),
        })
}

/// A typed request that can be rebuilt with `confirm_margin_trade`
pub trait ConfirmableRequest {
    /// Target request type
    const KIND: RequestKind;

    /// Copy every field except the confirmation flag
    fn write_fields(&self, writer: &mut FieldWriter<'_>) -> Result<(), BuildError>;
}

/// Build the dynamic counterpart of `request` with `confirm_margin_trade = true`.
///
/// Resolves descriptors through `registry`, compiling the schema on first
/// use. On error nothing is returned; the partially written message is
/// dropped.
pub fn build<R: ConfirmableRequest>(
    registry: &SchemaRegistry,
    request: &R,
) -> Result<DynamicMessage, BuildError> {
    let descriptors = registry.resolve()?;
    let mut writer = FieldWriter::new(R::KIND, descriptors);
    request.write_fields(&mut writer)?;
    writer.set(CONFIRM_MARGIN_TRADE, FieldValue::Bool(true))?;
    Ok(writer.message)
}
