use crate::{endpoints::EndpointError, Session, UserInfo};
use reqwest::Client;

/// Fetch a snapshot of the authenticated user's account details.
pub async fn get_user_info(
    client: &Client,
    hostname: &str,
    session: &Session,
) -> Result<UserInfo, EndpointError> {
    let response =
        super::post(client, hostname, "frp/api/getUserInfo", session).await?;

    let body = response.text().await?;
    log::trace!("Response: {}", body);

    let user_info: UserInfo = serde_json::from_str(&body)?;
    log::trace!("Parsed response: {:#?}", user_info);

    Ok(user_info)
}
