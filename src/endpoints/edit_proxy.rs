use crate::{endpoints::EndpointError, Session};
use reqwest::Client;

/// Change a tunnel's options, returning the service's success flag.
///
/// `changes` is sent to the service verbatim; the accepted keys are
/// whatever `/frp/api/editProxy` accepts.
pub async fn edit_proxy(
    client: &Client,
    hostname: &str,
    session: &Session,
    proxy_id: &str,
    changes: &[(String, String)],
) -> Result<bool, EndpointError> {
    let mut data = vec![
        (String::from("session"), session.token.clone()),
        (String::from("proxy_id"), String::from(proxy_id)),
    ];
    data.extend(changes.iter().cloned());

    let response =
        super::send_form(client, hostname, "frp/api/editProxy", Some(session), &data)
            .await?;

    let body = response.text().await?;
    log::trace!("Response: {}", body);

    let parsed: super::FlagResponse = serde_json::from_str(&body)?;

    Ok(parsed.flag)
}
