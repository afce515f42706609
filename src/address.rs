//! Stringified references to a well-known service.

use std::fmt;
use std::str::FromStr;

/// The address of the DbMan service on the local interface.
pub const DEFAULT_SERVICE_ADDRESS: &str = "DbMan@::12321";

/// The host used when an address leaves its host empty.
const DEFAULT_HOST: &str = "localhost";

/// An error parsing a [`ServiceAddress`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The address has no `@`.
    #[error("service address `{0}` has no `@` separating the service name from its endpoint")]
    MissingSeparator(String),
    /// Nothing precedes the `@`.
    #[error("service address `{0}` has an empty service name")]
    EmptyService(String),
    /// The port is missing or not a `u16`.
    #[error("service address `{0}` has no valid port")]
    InvalidPort(String),
    /// The transport is neither empty nor `tcp`.
    #[error("transport `{0}` is not supported; only `tcp` is")]
    UnsupportedTransport(String),
    /// A `[` opening an IPv6 host is never closed.
    #[error("service address `{0}` has an unterminated `[` in its host")]
    UnterminatedHost(String),
}

/// A stringified reference to a service: `<service>@[<transport>:]<host>:<port>`.
///
/// The transport may be empty or `tcp`. An empty host means the local interface. IPv6 hosts must be
/// written in brackets, e.g. `DbMan@tcp:[::1]:12321`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceAddress {
    /// The well-known name of the service.
    service: String,
    /// The transport, if one was written.
    transport: String,
    /// The host, possibly empty.
    host: String,
    /// The port the service listens on.
    port: u16,
}

impl ServiceAddress {
    /// The well-known name of the service, e.g. `DbMan`.
    #[inline]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The host as written, which may be empty.
    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port the service listens on.
    #[inline]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// The URI a gRPC channel should connect to.
    pub fn uri(&self) -> String {
        let host = if self.host.is_empty() {
            DEFAULT_HOST
        } else {
            &self.host
        };
        format!("http://{host}:{}", self.port)
    }
}

impl FromStr for ServiceAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((service, endpoint)) = s.split_once('@') else {
            return Err(AddressError::MissingSeparator(s.to_owned()));
        };
        if service.is_empty() {
            return Err(AddressError::EmptyService(s.to_owned()));
        }

        let Some((rest, port)) = endpoint.rsplit_once(':') else {
            return Err(AddressError::InvalidPort(s.to_owned()));
        };
        let port = port
            .parse()
            .map_err(|_| AddressError::InvalidPort(s.to_owned()))?;

        let (transport, host) = if let Some(bracketed) = rest.strip_prefix('[') {
            if !bracketed.ends_with(']') {
                return Err(AddressError::UnterminatedHost(s.to_owned()));
            }
            ("", rest)
        } else {
            match rest.split_once(':') {
                Some((transport, host)) => {
                    if host.starts_with('[') && !host.ends_with(']') {
                        return Err(AddressError::UnterminatedHost(s.to_owned()));
                    }
                    (transport, host)
                }
                None => ("", rest),
            }
        };
        if !transport.is_empty() && transport != "tcp" {
            return Err(AddressError::UnsupportedTransport(transport.to_owned()));
        }

        Ok(Self {
            service: service.to_owned(),
            transport: transport.to_owned(),
            host: host.to_owned(),
            port,
        })
    }
}

impl fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}:{}:{}",
            self.service, self.transport, self.host, self.port
        )
    }
}

impl Default for ServiceAddress {
    fn default() -> Self {
        Self {
            service: "DbMan".to_owned(),
            transport: String::new(),
            host: String::new(),
            port: 12321,
        }
    }
}
