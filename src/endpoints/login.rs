use crate::Session;
use reqwest::{header, Client, Error as ReqwestError};
use serde_derive::{Deserialize, Serialize};

/// Authenticate with the OpenFrp servers and get a new [`Session`].
pub async fn login(
    client: &Client,
    hostname: &str,
    username: &str,
    password: &str,
) -> Result<Session, LoginError> {
    let data = Data { username, password };
    let response =
        super::send_form(client, hostname, "user/login", None, &data).await?;

    // the credential comes back out-of-band, as a response header
    let authorization = response
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    let body = response.text().await?;
    log::trace!("Response: {}", body);

    let parsed: LoginResponse = serde_json::from_str(&body)?;
    log::trace!("Parsed response: {:#?}", parsed);

    interpret_response(parsed, authorization, username)
}

fn interpret_response(
    response: LoginResponse,
    authorization: Option<String>,
    username: &str,
) -> Result<Session, LoginError> {
    if !response.flag {
        let message = response
            .msg
            .unwrap_or_else(|| String::from("no reason given"));
        log::error!("Login failed: {}", message);

        return Err(LoginError::RejectedByServer { message });
    }

    let token = response.data.ok_or(LoginError::MissingSessionToken)?;
    let authorization = authorization.ok_or(LoginError::MissingAuthorization)?;

    log::info!("Logged in as {}", username);

    Ok(Session {
        authorization,
        token,
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    flag: bool,
    /// The session token.
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

#[derive(Debug, Copy, Clone, Serialize)]
struct Data<'a> {
    username: &'a str,
    password: &'a str,
}

/// Possible errors that may be returned by [`login()`].
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The HTTP client encountered an error.
    #[error("Unable to send the login request")]
    HttpClient(#[from] ReqwestError),
    /// Unable to parse the login response.
    #[error("Unable to parse the login response")]
    ResponseParse(#[from] serde_json::Error),
    /// The server rejected the credentials.
    #[error("Login was rejected by the server: {}", message)]
    RejectedByServer { message: String },
    /// The server accepted the login but its response carried no session
    /// token.
    #[error("The login response did not include a session token")]
    MissingSessionToken,
    /// The server accepted the login but its response carried no
    /// `Authorization` header.
    #[error("The login response did not include an Authorization header")]
    MissingAuthorization,
}
