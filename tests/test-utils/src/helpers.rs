//! Test helper functions and utilities

use invest_client::schema::embedded::{COMMON_PROTO, ORDERS_PROTO};
use invest_client::{EmbeddedSchema, SchemaSource};
use prost::Message;
use prost_reflect::DynamicMessage;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::EnvFilter;

/// Initialize test logging with environment-based configuration.
///
/// Safe to call multiple times - subsequent calls are ignored.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Embedded schema with individual files replaced or removed
#[derive(Debug, Clone)]
pub struct OverlaySchema {
    files: HashMap<String, String>,
    order: Vec<String>,
}

impl Default for OverlaySchema {
    fn default() -> Self {
        let order: Vec<String> = EmbeddedSchema
            .entry_files()
            .into_iter()
            .map(str::to_owned)
            .collect();
        let files = order
            .iter()
            .filter_map(|name| {
                EmbeddedSchema
                    .resolve(name)
                    .map(|text| (name.clone(), text.to_owned()))
            })
            .collect();
        Self { files, order }
    }
}

impl OverlaySchema {
    /// Replace `from` with `to` inside file `name`
    pub fn patch(mut self, name: &str, from: &str, to: &str) -> Self {
        if let Some(text) = self.files.get_mut(name) {
            *text = text.replace(from, to);
        }
        self
    }

    /// Remove file `name` from the source and the entry list
    pub fn without(mut self, name: &str) -> Self {
        self.files.remove(name);
        self.order.retain(|file| file != name);
        self
    }
}

impl SchemaSource for OverlaySchema {
    fn entry_files(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

/// Schema whose `Quotation` lacks the `nano` component
pub fn incomplete_quotation_schema() -> OverlaySchema {
    OverlaySchema::default().patch(COMMON_PROTO, "  int32 nano = 2;\n", "")
}

/// Schema whose `PostOrderRequest.confirm_margin_trade` sits on the wrong number
pub fn drifted_confirm_schema() -> OverlaySchema {
    OverlaySchema::default().patch(
        ORDERS_PROTO,
        "bool confirm_margin_trade = 9;",
        "bool confirm_margin_trade = 19;",
    )
}

/// Schema with a syntax error in `orders.proto`
pub fn malformed_schema() -> OverlaySchema {
    OverlaySchema::default().patch(ORDERS_PROTO, "message PostOrderResponse {", "message {")
}

/// Source wrapper counting how often each file is read
#[derive(Clone)]
pub struct CountingSchema<S> {
    inner: S,
    reads: Arc<AtomicUsize>,
}

impl<S> CountingSchema<S> {
    /// Wrap `inner`
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared read counter, usable after the source moved into a registry
    pub fn reads(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.reads)
    }
}

impl<S: SchemaSource> SchemaSource for CountingSchema<S> {
    fn entry_files(&self) -> Vec<&str> {
        self.inner.entry_files()
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(name)
    }
}

/// Decode the wire form of `message` as a generated type
pub fn decode_as<T: Message + Default>(message: &DynamicMessage) -> anyhow::Result<T> {
    Ok(T::decode(message.encode_to_vec().as_slice())?)
}
