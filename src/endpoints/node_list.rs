use crate::{endpoints::EndpointError, Node, Session};
use reqwest::Client;
use serde_derive::Deserialize;

/// Fetch the forwarding nodes available to the user.
pub async fn node_list(
    client: &Client,
    hostname: &str,
    session: &Session,
) -> Result<Vec<Node>, EndpointError> {
    let response =
        super::get(client, hostname, "frp/api/getNodeList", session).await?;

    let body = response.text().await?;
    log::trace!("Response: {}", body);

    let document: Document = serde_json::from_str(&body)?;

    Ok(document.data)
}

#[derive(Debug, Deserialize)]
struct Document {
    data: Vec<Node>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_the_node_list() {
        let got: Document =
            serde_json::from_str(r#"{"data": [{"id": "n1"}]}"#).unwrap();

        assert_eq!(got.data.len(), 1);
        assert_eq!(got.data[0].id, "n1");
    }

    #[test]
    fn a_response_without_data_is_a_shape_fault() {
        assert!(serde_json::from_str::<Document>("{}").is_err());
    }
}
