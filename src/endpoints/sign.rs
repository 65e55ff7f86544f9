use crate::{endpoints::EndpointError, Session};
use reqwest::Client;

/// Perform the daily check-in, returning the server's message.
///
/// The outcome is always a human-readable string: the server's own message
/// on success, a fixed message otherwise.
pub async fn sign_in(
    client: &Client,
    hostname: &str,
    session: &Session,
) -> Result<String, EndpointError> {
    let response =
        super::post(client, hostname, "frp/api/userSign", session).await?;

    let body = response.text().await?;
    log::trace!("Response: {}", body);

    let parsed: super::FlagResponse = serde_json::from_str(&body)?;

    Ok(interpret_response(parsed))
}

fn interpret_response(response: super::FlagResponse) -> String {
    if response.flag {
        response
            .msg
            .unwrap_or_else(|| String::from("check-in succeeded"))
    } else {
        String::from("check-in failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::FlagResponse;

    #[test]
    fn check_in_returns_the_server_message() {
        let response: FlagResponse =
            serde_json::from_str(r#"{"flag": true, "msg": "ok"}"#).unwrap();

        assert_eq!(interpret_response(response), "ok");
    }

    #[test]
    fn a_failed_check_in_has_a_fixed_message() {
        let response: FlagResponse =
            serde_json::from_str(r#"{"flag": false}"#).unwrap();

        assert_eq!(interpret_response(response), "check-in failed");
    }

    #[test]
    fn a_success_without_a_message_gets_a_default() {
        let response: FlagResponse =
            serde_json::from_str(r#"{"flag": true}"#).unwrap();

        assert_eq!(interpret_response(response), "check-in succeeded");
    }
}
