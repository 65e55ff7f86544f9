#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Session {
    /// The `Authorization` header value handed out by the login response,
    /// replayed verbatim on every authenticated request.
    pub authorization: String,
    /// The opaque session token sent in mutating request bodies.
    pub token: String,
}
