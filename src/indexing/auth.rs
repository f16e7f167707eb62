//! OAuth 2.0 service-account flow: a signed RS256 assertion traded for a
//! bearer token at the key's `token_uri`.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::{IndexingError, ServiceAccountKey};

const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Sign the JWT assertion for `scope`, issued at `now` (unix seconds).
pub fn sign_assertion(
    key: &ServiceAccountKey,
    scope: &str,
    now: i64,
) -> Result<String, IndexingError> {
    let claims = Claims {
        iss: key.client_email.clone(),
        scope: scope.to_string(),
        aud: key.token_uri.clone(),
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };
    let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &signing_key)?)
}

pub(super) async fn fetch_access_token(
    http: &reqwest::Client,
    key: &ServiceAccountKey,
    scope: &str,
) -> Result<String, IndexingError> {
    let assertion = sign_assertion(key, scope, chrono::Utc::now().timestamp())?;

    let response = http
        .post(&key.token_uri)
        .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(IndexingError::TokenExchange {
            status: status.as_u16(),
            body,
        });
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation};

    pub(crate) const TEST_PRIVATE_KEY: &str = include_str!("../../tests/fixtures/test-key.pem");
    const TEST_PUBLIC_KEY: &str = include_str!("../../tests/fixtures/test-key.pub.pem");

    pub(crate) fn test_key(token_uri: &str) -> ServiceAccountKey {
        ServiceAccountKey {
            client_email: "indexer@toolshelf-test.iam.gserviceaccount.com".to_string(),
            private_key: TEST_PRIVATE_KEY.to_string(),
            token_uri: token_uri.to_string(),
        }
    }

    #[test]
    fn assertion_is_signed_and_expires_in_an_hour() {
        let key = test_key("https://oauth2.example.test/token");
        let now = chrono::Utc::now().timestamp();
        let assertion = sign_assertion(&key, crate::indexing::INDEXING_SCOPE, now).unwrap();

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&["https://oauth2.example.test/token"]);
        let decoded = jsonwebtoken::decode::<Claims>(
            &assertion,
            &DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap(),
            &validation,
        )
        .unwrap();

        assert_eq!(decoded.claims.iss, key.client_email);
        assert_eq!(decoded.claims.scope, "https://www.googleapis.com/auth/indexing");
        assert_eq!(decoded.claims.iat, now);
        assert_eq!(decoded.claims.exp, now + 3600);
    }

    #[test]
    fn bad_private_key_is_a_signing_error() {
        let mut key = test_key("https://oauth2.example.test/token");
        key.private_key = "not a pem".to_string();
        assert!(matches!(
            sign_assertion(&key, "scope", 0),
            Err(IndexingError::Signing(_))
        ));
    }
}
