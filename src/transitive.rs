//! In-process proxies for testing and benchmarking.
//!
//! A transitive proxy talks gRPC to a service running on the same Tokio runtime, connected through
//! an in-memory pipe rather than a socket.

use crate::address::ServiceAddress;
use crate::invoke::{InvokeRpc, InvokerServer, Proxy};
use hyper_util::rt::TokioIo;
use std::ops::{Deref, DerefMut};
use tokio::task::JoinHandle;
use tonic::transport::{Endpoint, Server};

/// The capacity of the in-memory pipe, in bytes.
const DUPLEX_SIZE: usize = 1024;

/// A client connected to an in-process server. The server is shut down on drop.
#[derive(Debug)]
pub struct Transitive<T> {
    /// The connected client.
    client: T,
    /// The task serving requests.
    server: JoinHandle<Result<(), tonic::transport::Error>>,
}

impl<T> Deref for Transitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl<T> DerefMut for Transitive<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

impl<T> Drop for Transitive<T> {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Serve `service` in-process and return a proxy connected to it.
///
/// `address` is only used to name the service in each request; nothing listens on it.
pub async fn transitive_proxy<S>(
    address: ServiceAddress,
    service: S,
) -> Result<Transitive<Proxy>, tonic::transport::Error>
where
    S: InvokeRpc,
{
    let (client, server) = tokio::io::duplex(DUPLEX_SIZE);

    let server = tokio::spawn(async move {
        Server::builder()
            .add_service(InvokerServer::new(service))
            .serve_with_incoming(tokio_stream::once(Ok::<_, std::io::Error>(server)))
            .await
    });

    // The pipe is a single connection, so only the first connect attempt can be served.
    let mut client = Some(client);
    let channel = Endpoint::try_from(address.uri())?
        .connect_with_connector(tower::service_fn(move |_| {
            let client = client.take();
            async move {
                if let Some(client) = client {
                    Ok(TokioIo::new(client))
                } else {
                    Err(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        "in-memory pipe already connected",
                    ))
                }
            }
        }))
        .await?;

    Ok(Transitive {
        client: Proxy::with_channel(address, channel),
        server,
    })
}
