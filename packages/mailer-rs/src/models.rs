use serde::Deserialize;

/// Response body returned by the mail API on accepted messages
#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    pub id: Option<String>,
    pub message: Option<String>,
}
