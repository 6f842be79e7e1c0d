//! Runtime schema for the requests that carry `confirm_margin_trade`
//!
//! The generated bindings cannot express the confirmation field, so the
//! affected request types are described again here and compiled into
//! reflective descriptors on first use. Compilation happens at most once per
//! [`SchemaRegistry`]; its outcome, success or failure, is kept for the
//! registry's lifetime.

pub mod embedded;
mod layout;

pub use embedded::EmbeddedSchema;
pub use layout::PINNED_FIELDS;

use crate::error::SchemaError;
use prost_reflect::{DescriptorPool, MessageDescriptor};
use protox::Compiler;
use protox::file::{File, FileResolver};
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::{debug, error};

/// Fully-qualified name of the order placement request
pub const POST_ORDER_REQUEST: &str = "tinkoff.public.invest.api.contract.v1.PostOrderRequest";
/// Fully-qualified name of the stop-order placement request
pub const POST_STOP_ORDER_REQUEST: &str =
    "tinkoff.public.invest.api.contract.v1.PostStopOrderRequest";
/// Fully-qualified name of the shared quotation type
pub const QUOTATION: &str = "tinkoff.public.invest.api.contract.v1.Quotation";

/// Supplies schema text by logical file name.
///
/// Imports are resolved through the same source; nothing is read from the
/// filesystem.
pub trait SchemaSource: Send + Sync {
    /// Files to compile, dependencies first
    fn entry_files(&self) -> Vec<&str>;

    /// Text of `name`, or `None` when the source does not provide it
    fn resolve(&self, name: &str) -> Option<&str>;
}

struct SourceResolver(Arc<dyn SchemaSource>);

impl FileResolver for SourceResolver {
    fn resolve_path(&self, path: &Path) -> Option<String> {
        let name = path.to_str()?;
        self.0.resolve(name).map(|_| name.to_owned())
    }

    fn open_file(&self, name: &str) -> Result<File, protox::Error> {
        match self.0.resolve(name) {
            Some(source) => File::from_source(name, source),
            None => Err(protox::Error::file_not_found(name)),
        }
    }
}

/// Descriptors retained from the compiled schema
#[derive(Debug, Clone)]
pub struct ConfirmDescriptors {
    post_order: MessageDescriptor,
    post_stop_order: MessageDescriptor,
    quotation: MessageDescriptor,
}

impl ConfirmDescriptors {
    /// `PostOrderRequest` including `confirm_margin_trade`
    pub fn post_order(&self) -> &MessageDescriptor {
        &self.post_order
    }

    /// `PostStopOrderRequest` including `confirm_margin_trade`
    pub fn post_stop_order(&self) -> &MessageDescriptor {
        &self.post_stop_order
    }

    /// `Quotation`
    pub fn quotation(&self) -> &MessageDescriptor {
        &self.quotation
    }

    /// Pool every retained descriptor belongs to
    pub fn pool(&self) -> &DescriptorPool {
        self.post_order.parent_pool()
    }
}

/// Lazily compiled, thread-safe descriptor cache.
///
/// The first caller of [`resolve`](Self::resolve) compiles; concurrent
/// callers block until that result exists and then observe the same value.
/// Failures are not retried.
pub struct SchemaRegistry {
    source: Arc<dyn SchemaSource>,
    resolved: OnceLock<Result<ConfirmDescriptors, SchemaError>>,
    compilations: AtomicUsize,
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("resolved", &self.resolved.get().map(Result::is_ok))
            .field("compilations", &self.compilations())
            .finish_non_exhaustive()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::embedded()
    }
}

impl SchemaRegistry {
    /// Registry over an arbitrary schema source
    pub fn new(source: impl SchemaSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            resolved: OnceLock::new(),
            compilations: AtomicUsize::new(0),
        }
    }

    /// Registry over the schema compiled into the binary
    pub fn embedded() -> Self {
        Self::new(EmbeddedSchema)
    }

    /// Descriptors for the confirmation-capable requests, compiling on first use
    pub fn resolve(&self) -> Result<&ConfirmDescriptors, SchemaError> {
        self.resolved
            .get_or_init(|| {
                self.compilations.fetch_add(1, Ordering::SeqCst);
                let outcome = compile(Arc::clone(&self.source));
                match &outcome {
                    Ok(_) => debug!("Compiled embedded schema for confirm_margin_trade"),
                    Err(e) => error!("Embedded schema unusable: {}", e),
                }
                outcome
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Check every field the builder writes against [`PINNED_FIELDS`]
    pub fn verify_layout(&self) -> Result<(), SchemaError> {
        layout::verify(self.resolve()?.pool())
    }

    /// Whether a compilation outcome is cached
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// How many times the compile step ran
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::SeqCst)
    }
}

fn compile(source: Arc<dyn SchemaSource>) -> Result<ConfirmDescriptors, SchemaError> {
    let files: Vec<String> = source
        .entry_files()
        .into_iter()
        .map(str::to_owned)
        .collect();

    let mut compiler = Compiler::with_file_resolver(SourceResolver(source));
    compiler.include_imports(true);
    compiler
        .open_files(&files)
        .map_err(|e| SchemaError::Parse(e.to_string()))?;

    let pool = DescriptorPool::from_file_descriptor_set(compiler.file_descriptor_set())
        .map_err(|e| SchemaError::Assemble(e.to_string()))?;

    Ok(ConfirmDescriptors {
        post_stop_order: find_message(&pool, POST_STOP_ORDER_REQUEST)?,
        post_order: find_message(&pool, POST_ORDER_REQUEST)?,
        quotation: find_message(&pool, QUOTATION)?,
    })
}

fn find_message(pool: &DescriptorPool, name: &str) -> Result<MessageDescriptor, SchemaError> {
    pool.get_message_by_name(name)
        .ok_or_else(|| SchemaError::MissingMessage {
            name: name.to_string(),
        })
}
