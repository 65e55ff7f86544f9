//! Tunnel management.

use crate::utils;
use rand::{distributions::Alphanumeric, Rng};
use serde_derive::Deserialize;
use serde_json::{Map, Value};
use std::fmt::{self, Display, Formatter};

/// Prefix used when generating a name for an unnamed tunnel.
const GENERATED_NAME_PREFIX: &str = "openfrp_";

/// The remote port the generator refuses to hand out.
const RESERVED_REMOTE_PORT: u32 = 25565;

/// The protocols a tunnel can forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyType {
    Tcp,
    Udp,
    Http,
    Https,
    Stcp,
    Xtcp,
    /// A protocol this crate doesn't know about, passed through to the
    /// service as-is.
    Other(String),
}

impl ProxyType {
    pub fn as_str(&self) -> &str {
        match self {
            ProxyType::Tcp => "tcp",
            ProxyType::Udp => "udp",
            ProxyType::Http => "http",
            ProxyType::Https => "https",
            ProxyType::Stcp => "stcp",
            ProxyType::Xtcp => "xtcp",
            ProxyType::Other(other) => other,
        }
    }
}

impl Default for ProxyType {
    fn default() -> ProxyType {
        ProxyType::Tcp
    }
}

impl Display for ProxyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ProxyType {
    fn from(s: &str) -> ProxyType {
        match s {
            "tcp" => ProxyType::Tcp,
            "udp" => ProxyType::Udp,
            "http" => ProxyType::Http,
            "https" => ProxyType::Https,
            "stcp" => ProxyType::Stcp,
            "xtcp" => ProxyType::Xtcp,
            other => ProxyType::Other(String::from(other)),
        }
    }
}

/// Parameters for creating a new tunnel.
///
/// Only the node id is mandatory. An unnamed tunnel gets a generated name,
/// and an unset remote port gets a random one, chosen when the request is
/// built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    /// The node the tunnel will be bound to.
    pub node_id: String,
    pub name: Option<String>,
    pub proxy_type: ProxyType,
    pub local_addr: String,
    pub local_port: u16,
    pub remote_port: Option<u32>,
    /// Extra protocol-specific options, sent to the service verbatim.
    pub extras: Vec<(String, String)>,
}

impl ProxyConfig {
    pub fn new(node_id: &str) -> ProxyConfig {
        ProxyConfig {
            node_id: String::from(node_id),
            name: None,
            proxy_type: ProxyType::default(),
            local_addr: String::from("127.0.0.1"),
            local_port: 25565,
            remote_port: None,
            extras: Vec::new(),
        }
    }

    /// The name the request will actually carry.
    pub(crate) fn resolved_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => generated_name(&self.proxy_type),
        }
    }

    /// The remote port the request will actually carry.
    pub(crate) fn resolved_remote_port(&self) -> u32 {
        match self.remote_port {
            Some(port) => port,
            None => random_remote_port(),
        }
    }
}

/// A tunnel the service already knows about.
///
/// Only the fields this crate consumes are typed out; everything else the
/// service reports is kept in `attributes`, untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[non_exhaustive]
pub struct Proxy {
    /// The server-assigned tunnel id.
    #[serde(deserialize_with = "utils::string_or_number")]
    pub id: String,
    #[serde(rename = "proxyName")]
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// The user's tunnels, in the order the service reports them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[non_exhaustive]
pub struct ProxyList {
    pub list: Vec<Proxy>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Generate a name for an unnamed tunnel: a fixed prefix, the protocol
/// type, then 10 random alphanumeric characters.
fn generated_name(proxy_type: &ProxyType) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect();

    format!("{}{}{}", GENERATED_NAME_PREFIX, proxy_type, suffix)
}

/// Pick a random remote port in `[10000, 90000)`, re-rolling while it lands
/// on the reserved one.
fn random_remote_port() -> u32 {
    let mut rng = rand::thread_rng();

    loop {
        let port = rng.gen_range(10_000..90_000);
        if port != RESERVED_REMOTE_PORT {
            return port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_have_the_expected_shape() {
        for _ in 0..100 {
            let name = generated_name(&ProxyType::Udp);

            let suffix = name.strip_prefix("openfrp_udp").unwrap();
            assert_eq!(suffix.len(), 10);
            assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn random_ports_stay_in_range_and_avoid_the_reserved_one() {
        for _ in 0..1000 {
            let port = random_remote_port();

            assert!(port >= 10_000 && port < 90_000);
            assert_ne!(port, RESERVED_REMOTE_PORT);
        }
    }

    #[test]
    fn explicit_names_and_ports_pass_through_unchanged() {
        let mut config = ProxyConfig::new("42");
        config.name = Some(String::from("my-tunnel"));
        config.remote_port = Some(20_000);

        assert_eq!(config.resolved_name(), "my-tunnel");
        assert_eq!(config.resolved_remote_port(), 20_000);
    }

    #[test]
    fn unknown_protocol_types_pass_through() {
        let kcp = ProxyType::from("kcp");

        assert_eq!(kcp, ProxyType::Other(String::from("kcp")));
        assert_eq!(kcp.as_str(), "kcp");
        assert_eq!(ProxyType::from("stcp"), ProxyType::Stcp);
    }

    #[test]
    fn parse_a_proxy_record() {
        let src = r#"{"id": 7, "proxyName": "web", "proxyType": "http", "domain": "example.com"}"#;
        let got: Proxy = serde_json::from_str(src).unwrap();

        assert_eq!(got.id, "7");
        assert_eq!(got.name, "web");
        assert_eq!(got.attributes["proxyType"], "http");
        assert_eq!(got.attributes["domain"], "example.com");
    }
}
