//! Connection entry point handing out service clients

use super::{OrdersClient, RequestMetadata, StopOrdersClient};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::schema::SchemaRegistry;
use crate::transport::ChannelInvoker;
use invest_proto::{OrdersServiceClient, StopOrdersServiceClient};
use std::sync::Arc;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, error, info};

/// Invest API client owning the channel and the schema registry shared by
/// every service client it creates
#[derive(Debug, Clone)]
pub struct InvestClient {
    config: ClientConfig,
    channel: Channel,
    registry: Arc<SchemaRegistry>,
}

impl InvestClient {
    /// Connect to the configured endpoint
    pub async fn connect(config: ClientConfig) -> ClientResult<Self> {
        info!("Connecting to Invest API at {}", config.endpoint);
        let channel = endpoint(&config)?.connect().await?;
        Ok(Self::from_channel(config, channel))
    }

    /// Client over an existing channel, using the embedded schema
    pub fn from_channel(config: ClientConfig, channel: Channel) -> Self {
        Self::with_registry(config, channel, SchemaRegistry::embedded())
    }

    /// Client over an existing channel and an explicit schema registry.
    ///
    /// With `verify_schema` set the schema is compiled here and checked
    /// against the pinned wire layout. A failed check is logged and the
    /// client is still built: unconfirmed orders never use the schema, and
    /// confirmed orders report the memoized compile error themselves.
    pub fn with_registry(config: ClientConfig, channel: Channel, registry: SchemaRegistry) -> Self {
        let registry = Arc::new(registry);
        if config.verify_schema {
            match registry.verify_layout() {
                Ok(()) => debug!("Embedded schema layout verified"),
                Err(e) => error!("Embedded schema check failed: {}", e),
            }
        }
        Self {
            config,
            channel,
            registry,
        }
    }

    /// `OrdersService` client
    pub fn orders(&self) -> OrdersClient {
        OrdersClient::new(
            Arc::new(OrdersServiceClient::new(self.channel.clone())),
            Arc::new(ChannelInvoker::new(self.channel.clone())),
            Arc::clone(&self.registry),
        )
        .with_metadata(RequestMetadata::from_config(&self.config))
    }

    /// `StopOrdersService` client
    pub fn stop_orders(&self) -> StopOrdersClient {
        StopOrdersClient::new(
            Arc::new(StopOrdersServiceClient::new(self.channel.clone())),
            Arc::new(ChannelInvoker::new(self.channel.clone())),
            Arc::clone(&self.registry),
        )
        .with_metadata(RequestMetadata::from_config(&self.config))
    }

    /// Shared schema registry
    pub fn registry(&self) -> &Arc<SchemaRegistry> {
        &self.registry
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Channel endpoint with the configured timeouts
pub fn endpoint(config: &ClientConfig) -> ClientResult<Endpoint> {
    let endpoint = Endpoint::from_shared(config.endpoint.clone()).map_err(|e| {
        ClientError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        }
    })?;
    Ok(endpoint
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs)))
}
