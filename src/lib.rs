//! A client for the DbMan database-management service.
//!
//! The service is reached through a single generic gRPC call, [`Invoke::invoke`], which sends an
//! operation name and an argument map and receives a result map. On top of that primitive this
//! crate provides argument resolution for the `dbq` command-line tool, request dispatch for the
//! three query modes, and text renderers for the results.

mod internal_macros;
mod tracing_shim;

pub mod address;
pub mod args;
mod conv;
pub mod dispatch;
pub mod error;
pub mod invoke;
pub mod render;
pub mod transitive;

/// Types generated from the protobuf schema.
pub mod proto {
    #![allow(
        missing_docs,
        unreachable_pub,
        unused_results,
        clippy::missing_docs_in_private_items
    )]
    tonic::include_proto!("dbman");
}

/// The response type of a gRPC call.
pub type RpcResponse<T> = Result<tonic::Response<T>, tonic::Status>;

pub use crate::address::{ServiceAddress, DEFAULT_SERVICE_ADDRESS};
pub use crate::args::{Invocation, Mode, Target};
pub use crate::dispatch::{dispatch, QueryOutput};
pub use crate::error::Error;
pub use crate::invoke::{Invoke, InvokeRpc, InvokerServer, Proxy};
