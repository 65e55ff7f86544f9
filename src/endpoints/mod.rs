//! The OpenFrp API's endpoints.

mod edit_proxy;
mod login;
mod new_proxy;
mod node_list;
mod remove_proxy;
mod sign;
mod user_info;
mod user_proxies;

pub use edit_proxy::edit_proxy;
pub use login::{login, LoginError};
pub use new_proxy::{create_proxy, new_proxy, CreateProxyError, CreatedProxy};
pub use node_list::node_list;
pub use remove_proxy::remove_proxy;
pub use sign::sign_in;
pub use user_info::get_user_info;
pub use user_proxies::get_user_proxies;

use crate::Session;
use reqwest::{header, Client, Error, Response};
use serde::Serialize;
use serde_derive::Deserialize;
use std::fmt::Debug;

/// Typical endpoint errors.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    /// The HTTP client encountered an error.
    #[error("Unable to send the request")]
    HttpClient(#[from] Error),
    /// Unable to parse the JSON in the response.
    #[error("Unable to parse the response")]
    ResponseParse(#[from] serde_json::Error),
}

/// The bare `{"flag": ..., "msg": ...}` reply the mutating endpoints send
/// back. A missing flag reads as false.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct FlagResponse {
    #[serde(default)]
    pub(crate) flag: bool,
    #[serde(default)]
    pub(crate) msg: Option<String>,
}

async fn send_form<D>(
    client: &Client,
    hostname: &str,
    path: &str,
    session: Option<&Session>,
    data: &D,
) -> Result<Response, Error>
where
    D: Debug + Serialize,
{
    let url = format!("https://{}/{}", hostname, path);

    log::debug!("Sending a request to {}", url);
    log::trace!("Payload: {:#?}", data);

    let mut request = client.post(&url).form(data);
    if let Some(session) = session {
        request =
            request.header(header::AUTHORIZATION, session.authorization.as_str());
    }

    let response = request.send().await?.error_for_status()?;

    log::trace!("Headers: {:#?}", response.headers());

    Ok(response)
}

async fn post(
    client: &Client,
    hostname: &str,
    path: &str,
    session: &Session,
) -> Result<Response, Error> {
    let url = format!("https://{}/{}", hostname, path);

    log::debug!("Sending a request to {}", url);

    let response = client
        .post(&url)
        .header(header::AUTHORIZATION, session.authorization.as_str())
        .send()
        .await?
        .error_for_status()?;

    log::trace!("Headers: {:#?}", response.headers());

    Ok(response)
}

async fn get(
    client: &Client,
    hostname: &str,
    path: &str,
    session: &Session,
) -> Result<Response, Error> {
    let url = format!("https://{}/{}", hostname, path);

    log::debug!("Sending a request to {}", url);

    let response = client
        .get(&url)
        .header(header::AUTHORIZATION, session.authorization.as_str())
        .send()
        .await?
        .error_for_status()?;

    log::trace!("Headers: {:#?}", response.headers());

    Ok(response)
}
