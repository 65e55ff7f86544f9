use crate::{endpoints::EndpointError, Proxy, ProxyConfig, Session};
use reqwest::Client;

/// Ask the service to allocate a new tunnel, returning its success flag.
///
/// A missing name or remote port in the [`ProxyConfig`] is filled in with a
/// generated one. Use [`create_proxy()`] to also learn the id the service
/// assigned.
pub async fn new_proxy(
    client: &Client,
    hostname: &str,
    session: &Session,
    config: &ProxyConfig,
) -> Result<bool, EndpointError> {
    let name = config.resolved_name();
    let remote_port = config.resolved_remote_port();

    let data = form_params(session, config, &name, remote_port);
    let response =
        super::send_form(client, hostname, "frp/api/newProxy", Some(session), &data)
            .await?;

    let body = response.text().await?;
    log::trace!("Response: {}", body);

    let parsed: super::FlagResponse = serde_json::from_str(&body)?;

    Ok(parsed.flag)
}

/// Create a tunnel and report the id the service assigned to it.
///
/// The composite form of [`new_proxy()`]: it resolves the tunnel's name up
/// front, allocates the tunnel, re-fetches the user's tunnel list, and scans
/// it for the entry whose name matches.
pub async fn create_proxy(
    client: &Client,
    hostname: &str,
    session: &Session,
    config: ProxyConfig,
) -> Result<CreatedProxy, CreateProxyError> {
    let mut config = config;
    let name = config.resolved_name();
    config.name = Some(name.clone());

    let accepted = new_proxy(client, hostname, session, &config).await?;
    if !accepted {
        log::warn!("The service reported failure for {}", name);
    }

    let proxies = super::get_user_proxies(client, hostname, session).await?;

    match find_created(&proxies.list, &name) {
        Some(created) => Ok(created),
        None => Err(CreateProxyError::NotCreated { name }),
    }
}

fn find_created(proxies: &[Proxy], name: &str) -> Option<CreatedProxy> {
    proxies
        .iter()
        .find(|proxy| proxy.name == name)
        .map(|proxy| CreatedProxy {
            name: proxy.name.clone(),
            id: proxy.id.clone(),
        })
}

fn form_params(
    session: &Session,
    config: &ProxyConfig,
    name: &str,
    remote_port: u32,
) -> Vec<(String, String)> {
    let mut data = vec![
        (String::from("session"), session.token.clone()),
        (String::from("name"), String::from(name)),
        (String::from("node_id"), config.node_id.clone()),
        (String::from("type"), config.proxy_type.to_string()),
        (String::from("local_addr"), config.local_addr.clone()),
        (String::from("local_port"), config.local_port.to_string()),
        (String::from("remote_port"), remote_port.to_string()),
    ];
    data.extend(config.extras.iter().cloned());

    data
}

/// A freshly created tunnel.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct CreatedProxy {
    pub name: String,
    /// The id the service assigned, usable with
    /// [`edit_proxy()`][super::edit_proxy] and
    /// [`remove_proxy()`][super::remove_proxy].
    pub id: String,
}

/// Possible errors that may be returned by [`create_proxy()`].
#[derive(Debug, thiserror::Error)]
pub enum CreateProxyError {
    /// One of the underlying requests failed.
    #[error("Unable to call the service")]
    Endpoint(#[from] EndpointError),
    /// The service took the request but the new tunnel never showed up in
    /// the tunnel list.
    #[error("No tunnel named {} was reported by the server", name)]
    NotCreated { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProxyType;
    use serde_json::Map;

    fn session() -> Session {
        Session {
            authorization: String::from("tok-abc"),
            token: String::from("SESS123"),
        }
    }

    #[test]
    fn the_request_carries_every_parameter_and_the_extras() {
        let mut config = ProxyConfig::new("12");
        config.proxy_type = ProxyType::Udp;
        config.local_port = 8080;
        config
            .extras
            .push((String::from("dataEncrypt"), String::from("true")));

        let got = form_params(&session(), &config, "my-tunnel", 20_000);

        let should_be = vec![
            (String::from("session"), String::from("SESS123")),
            (String::from("name"), String::from("my-tunnel")),
            (String::from("node_id"), String::from("12")),
            (String::from("type"), String::from("udp")),
            (String::from("local_addr"), String::from("127.0.0.1")),
            (String::from("local_port"), String::from("8080")),
            (String::from("remote_port"), String::from("20000")),
            (String::from("dataEncrypt"), String::from("true")),
        ];
        assert_eq!(got, should_be);
    }

    #[test]
    fn a_missing_flag_reads_as_failure() {
        let parsed: crate::endpoints::FlagResponse =
            serde_json::from_str("{}").unwrap();

        assert!(!parsed.flag);
    }

    #[test]
    fn scanning_finds_the_tunnel_by_name() {
        let proxies = vec![
            Proxy {
                id: String::from("41"),
                name: String::from("other"),
                attributes: Map::new(),
            },
            Proxy {
                id: String::from("42"),
                name: String::from("my-tunnel"),
                attributes: Map::new(),
            },
        ];

        let got = find_created(&proxies, "my-tunnel").unwrap();

        assert_eq!(got.name, "my-tunnel");
        assert_eq!(got.id, "42");
    }

    #[test]
    fn a_scan_miss_is_reported_not_swallowed() {
        assert!(find_created(&[], "my-tunnel").is_none());
    }
}
