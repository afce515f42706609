//! The request/response invocation primitive and its gRPC-backed proxy.

use crate::address::ServiceAddress;
use crate::error::Error;
use crate::internal_macros::future_send;
use crate::proto::invoker_client::InvokerClient;
use crate::proto::{Answer, Quest};
use crate::tracing_shim::{debug, warn};
use prost_types::Struct;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;

pub use crate::proto::invoker_server::{Invoker as InvokeRpc, InvokerServer};

/// Something that can invoke a named operation with an argument map.
pub trait Invoke {
    /// Invoke `operation` with `args`, returning the result map of the answer.
    fn invoke(&mut self, operation: &str, args: Struct) -> future_send!(Result<Struct, Status>);
}

/// A connection to a single well-known service.
///
/// The connection is released when the proxy is dropped.
#[derive(Debug)]
pub struct Proxy {
    /// The address the proxy was resolved from.
    address: ServiceAddress,
    /// The underlying gRPC client.
    client: InvokerClient<Channel>,
}

impl Proxy {
    /// Resolve `address` into a connected proxy.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(address), fields(address = %address))
    )]
    pub async fn resolve(address: &ServiceAddress) -> Result<Self, Error> {
        let resolve_err = |source| Error::Resolve {
            address: address.to_string(),
            source,
        };

        let channel = Endpoint::try_from(address.uri())
            .map_err(resolve_err)?
            .connect()
            .await
            .map_err(|err| {
                warn!(error = %err, "failed to connect");
                resolve_err(err)
            })?;
        debug!("resolved proxy");

        Ok(Self::with_channel(address.clone(), channel))
    }

    /// Create a proxy for `address` that communicates over an existing channel.
    #[inline]
    pub fn with_channel(address: ServiceAddress, channel: Channel) -> Self {
        Self {
            address,
            client: InvokerClient::new(channel),
        }
    }

    /// The address the proxy was resolved from.
    #[inline]
    pub const fn address(&self) -> &ServiceAddress {
        &self.address
    }
}

impl Invoke for Proxy {
    fn invoke(&mut self, operation: &str, args: Struct) -> future_send!(Result<Struct, Status>) {
        let quest = Quest {
            service: self.address.service().to_owned(),
            method: operation.to_owned(),
            args: Some(args),
        };

        async move {
            let method = quest.method.clone();
            match self.client.invoke(quest).await {
                Ok(response) => {
                    debug!(%method, "invocation answered");
                    let Answer { args } = response.into_inner();
                    Ok(args.unwrap_or_default())
                }
                Err(status) => {
                    warn!(%method, code = ?status.code(), "invocation failed");
                    Err(status)
                }
            }
        }
    }
}

impl Drop for Proxy {
    fn drop(&mut self) {
        debug!(address = %self.address, "releasing proxy");
    }
}
