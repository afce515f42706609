//! Either `tracing` or equivalent stubs that can be used in its place.
//!
//! Call sites import the macros from here rather than from `tracing` so that nothing needs to be
//! placed behind a `#[cfg]`. The only exception is the `#[instrument]` attribute, which needs to be
//! used as `#[cfg_attr(feature = "tracing", tracing::instrument)]`.

#![allow(unused_imports, unused_macros)]

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, error, info, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! event {
    ($($x:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {event as debug, event as error, event as info, event as warn};
