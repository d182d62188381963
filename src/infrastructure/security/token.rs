// src/infrastructure/security/token.rs
use crate::application::dto::AuthenticatedUser;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::security::TokenAuthenticator;
use crate::domain::user::{Role, UserId};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Bearer tokens in the compact form `base64url(payload).base64url(mac)`,
/// where the payload is `<user id>:<role>:<unix expiry>` and the mac is
/// HMAC-SHA256 over the payload bytes. Issuance belongs to the account
/// service; this side only needs the shared secret to verify.
#[derive(Clone)]
pub struct HmacTokenAuthenticator {
    secret: Vec<u8>,
}

impl HmacTokenAuthenticator {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Mints a token for the given principal. Used by operational tooling
    /// and tests; the production issuer lives in the account service.
    pub fn issue(&self, user: AuthenticatedUser, expires_at_unix: i64) -> String {
        let payload = format!(
            "{}:{}:{}",
            i64::from(user.id),
            user.role.as_str(),
            expires_at_unix
        );
        let mac = self.sign(payload.as_bytes());
        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(mac)
        )
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        // new_from_slice accepts keys of any length for HMAC.
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .unwrap_or_else(|_| unreachable!("hmac accepts any key length"));
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }

    fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (payload_part, mac_part) = token
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_part)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let tag = URL_SAFE_NO_PAD
            .decode(mac_part)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .unwrap_or_else(|_| unreachable!("hmac accepts any key length"));
        mac.update(&payload);
        mac.verify_slice(&tag)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))?;

        let payload = String::from_utf8(payload)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let mut parts = payload.splitn(3, ':');
        let (id, role, expiry) = match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(role), Some(expiry)) => (id, role, expiry),
            _ => return Err(ApplicationError::unauthorized("malformed token")),
        };

        let expiry: i64 = expiry
            .parse()
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        if expiry < Utc::now().timestamp() {
            return Err(ApplicationError::unauthorized("token expired"));
        }

        let id = id
            .parse::<i64>()
            .ok()
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;
        let role = role
            .parse::<Role>()
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;

        Ok(AuthenticatedUser::new(id, role))
    }
}

#[async_trait]
impl TokenAuthenticator for HmacTokenAuthenticator {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> HmacTokenAuthenticator {
        HmacTokenAuthenticator::new(b"test-secret".to_vec())
    }

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(7).unwrap(), Role::Admin)
    }

    #[tokio::test]
    async fn accepts_freshly_issued_token() {
        let auth = authenticator();
        let token = auth.issue(admin(), Utc::now().timestamp() + 3600);

        let principal = auth.authenticate(&token).await.unwrap();
        assert_eq!(principal, admin());
    }

    #[tokio::test]
    async fn rejects_expired_token() {
        let auth = authenticator();
        let token = auth.issue(admin(), Utc::now().timestamp() - 1);

        let err = auth.authenticate(&token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn rejects_tampered_payload() {
        let auth = authenticator();
        let token = auth.issue(admin(), Utc::now().timestamp() + 3600);

        let forged_payload = URL_SAFE_NO_PAD.encode(format!(
            "9:admin:{}",
            Utc::now().timestamp() + 3600
        ));
        let mac_part = token.split_once('.').unwrap().1;
        let forged = format!("{forged_payload}.{mac_part}");

        let err = auth.authenticate(&forged).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn rejects_token_signed_with_other_secret() {
        let auth = authenticator();
        let other = HmacTokenAuthenticator::new(b"other-secret".to_vec());
        let token = other.issue(admin(), Utc::now().timestamp() + 3600);

        let err = auth.authenticate(&token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn rejects_garbage() {
        let auth = authenticator();
        for token in ["", "not-a-token", "a.b.c", "!!!.???"] {
            let err = auth.authenticate(token).await.unwrap_err();
            assert!(matches!(err, ApplicationError::Unauthorized(_)), "{token}");
        }
    }
}
