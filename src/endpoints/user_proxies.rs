use crate::{endpoints::EndpointError, ProxyList, Session};
use reqwest::Client;
use serde_derive::Deserialize;

/// Fetch the user's tunnels.
pub async fn get_user_proxies(
    client: &Client,
    hostname: &str,
    session: &Session,
) -> Result<ProxyList, EndpointError> {
    let response =
        super::post(client, hostname, "frp/api/getUserProxies", session).await?;

    let body = response.text().await?;
    log::trace!("Response: {}", body);

    let document: Document = serde_json::from_str(&body)?;

    Ok(document.data)
}

#[derive(Debug, Deserialize)]
struct Document {
    data: ProxyList,
}
