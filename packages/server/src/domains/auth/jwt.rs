use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credential validity window in days. Renewal kicks in once less than
/// half of this window remains.
const VALIDITY_DAYS: i64 = 30;

/// JWT Claims - data stored in the credential cookie
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,   // Subject (account email)
    pub email: String, // Account email
    pub name: String,  // Display name
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
    pub iss: String,   // Issuer
    pub jti: String,   // JWT ID (unique token identifier)
}

/// JWT Service - creates and verifies the signed credential
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    /// Create new JWT service with secret and issuer
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a new credential for an account
    ///
    /// Token expires after 30 days
    pub fn create_token(&self, email: &str, name: &str) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::days(VALIDITY_DAYS);

        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(), // Unique token ID
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a credential
    ///
    /// Returns claims if the token is valid and not expired
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }

    /// Sliding renewal: re-issue once less than half the window remains
    pub fn should_renew(&self, claims: &Claims) -> bool {
        let now = chrono::Utc::now().timestamp();
        claims.exp - now < (VALIDITY_DAYS * 24 * 3600) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());

        let token = service.create_token("alice@example.com", "Alice").unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.iss, "test_issuer");
    }

    #[test]
    fn test_invalid_token() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let result = service.verify_token("invalid_token");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new("secret1", "test_issuer".to_string());
        let service2 = JwtService::new("secret2", "test_issuer".to_string());

        let token = service1.create_token("alice@example.com", "Alice").unwrap();

        // Token created with secret1 should not verify with secret2
        let result = service2.verify_token(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_expiry_window() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());

        let token = service.create_token("alice@example.com", "Alice").unwrap();
        let claims = service.verify_token(&token).unwrap();

        // Token should expire in ~30 days
        let now = chrono::Utc::now().timestamp();
        let expires_in = claims.exp - now;
        assert!(expires_in > 29 * 24 * 3600);
        assert!(expires_in <= 30 * 24 * 3600);
    }

    #[test]
    fn test_renewal_threshold() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let now = chrono::Utc::now().timestamp();

        let fresh = Claims {
            sub: "a@example.com".to_string(),
            email: "a@example.com".to_string(),
            name: "A".to_string(),
            exp: now + 20 * 24 * 3600,
            iat: now,
            iss: "test_issuer".to_string(),
            jti: "t1".to_string(),
        };
        assert!(!service.should_renew(&fresh));

        let aging = Claims {
            exp: now + 10 * 24 * 3600,
            jti: "t2".to_string(),
            ..fresh
        };
        assert!(service.should_renew(&aging));
    }
}
