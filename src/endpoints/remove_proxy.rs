use crate::{endpoints::EndpointError, Session};
use reqwest::Client;
use serde_derive::Serialize;

/// Delete a tunnel by id, returning the service's success flag.
pub async fn remove_proxy(
    client: &Client,
    hostname: &str,
    session: &Session,
    proxy_id: &str,
) -> Result<bool, EndpointError> {
    let data = Data {
        session: &session.token,
        proxy_id,
    };
    let response = super::send_form(
        client,
        hostname,
        "frp/api/removeProxy",
        Some(session),
        &data,
    )
    .await?;

    let body = response.text().await?;
    log::trace!("Response: {}", body);

    let parsed: super::FlagResponse = serde_json::from_str(&body)?;

    Ok(parsed.flag)
}

#[derive(Debug, Copy, Clone, Serialize)]
struct Data<'a> {
    session: &'a str,
    proxy_id: &'a str,
}
