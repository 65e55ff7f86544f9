use crate::utils;
use serde_derive::Deserialize;
use std::fmt::{self, Display, Formatter};

/// Placeholder rendered in place of any field the service left out.
const MISSING: &str = "fetch failed";

/// A read-only snapshot of the user's account.
///
/// Every field is optional. The service omits fields freely, and a missing
/// field should degrade to a placeholder in the rendered summary instead of
/// failing the whole call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[non_exhaustive]
pub struct UserInfo {
    pub username: Option<String>,
    pub id: Option<u64>,
    pub email: Option<String>,
    /// Whether the account has passed real-name verification.
    #[serde(default)]
    pub realname: bool,
    #[serde(
        rename = "regtime",
        default,
        deserialize_with = "utils::opt_string_or_number"
    )]
    pub registered_at: Option<String>,
    #[serde(rename = "friendlyGroup")]
    pub group: Option<String>,
    /// The account key tunnel clients authenticate with.
    pub token: Option<String>,
    /// Upload bandwidth limit in Kbps.
    #[serde(rename = "outLimit")]
    pub upload_limit: Option<u64>,
    /// Download bandwidth limit in Kbps.
    #[serde(rename = "inLimit")]
    pub download_limit: Option<u64>,
    /// Remaining traffic quota in MiB.
    pub traffic: Option<u64>,
    /// Tunnels currently in use.
    pub used: Option<u64>,
    /// Total tunnels the account may create.
    pub proxies: Option<u64>,
}

impl Display for UserInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fn field<T: Display>(value: &Option<T>) -> String {
            match value {
                Some(value) => value.to_string(),
                None => String::from(MISSING),
            }
        }

        let verified = if self.realname {
            "verified"
        } else {
            "unverified"
        };

        writeln!(f, "Username: {}", field(&self.username))?;
        writeln!(f, "User ID: {}", field(&self.id))?;
        writeln!(f, "Email: {}", field(&self.email))?;
        writeln!(f, "Real-name verification: {}", verified)?;
        writeln!(f, "Registered: {}", field(&self.registered_at))?;
        writeln!(f, "Group: {}", field(&self.group))?;
        writeln!(f, "Access token: {}", field(&self.token))?;
        writeln!(f, "Upload limit: {} Kbps", field(&self.upload_limit))?;
        writeln!(f, "Download limit: {} Kbps", field(&self.download_limit))?;
        writeln!(f, "Remaining traffic: {} MiB", field(&self.traffic))?;
        writeln!(f, "Tunnels used: {}", field(&self.used))?;
        write!(f, "Tunnel limit: {}", field(&self.proxies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_a_full_user_info_response() {
        let src = include_str!("user_info_response.json");
        let got: UserInfo = serde_json::from_str(src).unwrap();

        assert_eq!(got.username.as_deref(), Some("steve"));
        assert_eq!(got.id, Some(10086));
        assert!(got.realname);
        assert_eq!(got.registered_at.as_deref(), Some("2023-06-01 12:00:00"));
        assert_eq!(got.group.as_deref(), Some("Standard"));
        assert_eq!(got.upload_limit, Some(1024));
        assert_eq!(got.used, Some(2));
        assert_eq!(got.proxies, Some(10));
    }

    #[test]
    fn missing_fields_render_as_placeholders() {
        let sparse: UserInfo = serde_json::from_str("{}").unwrap();
        let rendered = sparse.to_string();

        assert!(rendered.contains("Username: fetch failed"));
        assert!(rendered.contains("Remaining traffic: fetch failed MiB"));
        assert!(rendered.contains("unverified"));
        assert!(!rendered.contains(": verified"));
    }

    #[test]
    fn a_verified_account_renders_as_verified() {
        let src = include_str!("user_info_response.json");
        let info: UserInfo = serde_json::from_str(src).unwrap();
        let rendered = info.to_string();

        assert!(rendered.contains("Real-name verification: verified"));
        assert!(rendered.contains("Username: steve"));
        assert!(rendered.contains("Upload limit: 1024 Kbps"));
        assert!(!rendered.contains(MISSING));
    }
}
