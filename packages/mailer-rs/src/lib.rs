use std::collections::HashMap;

pub mod models;
use reqwest::Client;

use crate::models::SendEmailResponse;

#[derive(Debug, Clone)]
pub struct MailerOptions {
    pub api_url: String,
    pub api_key: String,
    pub from_address: String,
    pub from_name: String,
}

#[derive(Debug, Clone)]
pub struct MailerService {
    options: MailerOptions,
}

impl MailerService {
    pub fn new(options: MailerOptions) -> Self {
        Self { options }
    }

    pub async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<SendEmailResponse, &'static str> {
        let url = format!("{}/messages", self.options.api_url.trim_end_matches('/'));

        let from = format!("{} <{}>", self.options.from_name, self.options.from_address);

        let mut form_body: HashMap<&str, &str> = HashMap::new();
        form_body.insert("from", &from);
        form_body.insert("to", recipient);
        form_body.insert("subject", subject);
        form_body.insert("html", html_body);

        let client = Client::new();
        let res = client
            .post(url)
            .basic_auth("api", Some(self.options.api_key.clone()))
            .form(&form_body)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // Log the error response from the mail API
                    let error_body = response.text().await.unwrap_or_default();
                    eprintln!("Mail API error ({}): {}", status, error_body);
                    return Err("Mail API returned an error");
                }

                let result = response.json::<SendEmailResponse>().await;
                match result {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        eprintln!("Failed to parse mail API response: {}", e);
                        Err("Error parsing send response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to mail API failed: {}", e);
                Err("Error sending email")
            }
        }
    }
}
