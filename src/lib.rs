//! An unofficial interface to the OpenFrp API.

#![forbid(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub mod endpoints;
mod nodes;
mod proxies;
mod session;
mod user_info;
mod utils;

pub use nodes::Node;
pub use proxies::{Proxy, ProxyConfig, ProxyList, ProxyType};
pub use session::Session;
pub use user_info::UserInfo;

/// The default user agent to use when communicating with the OpenFrp server.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));

/// The hostname of the main OpenFrp deployment.
pub const DEFAULT_HOSTNAME: &str = "of-dev-api.bfsea.xyz";
