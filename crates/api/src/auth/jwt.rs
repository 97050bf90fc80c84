//! Verification of staff access tokens.
//!
//! Tokens are HS256-signed by the hotel platform's identity service. This
//! server holds the shared secret and only ever checks signatures and expiry.

use galley_core::types::DbId;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Clock skew tolerated when checking `exp`, in seconds.
const DEFAULT_LEEWAY_SECS: u64 = 60;

/// Claims this service reads from a staff token.
///
/// Other claims set by the issuer are ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct StaffClaims {
    /// The staff member's id in the identity service.
    pub sub: DbId,
    /// Role name, e.g. `"chef"` or `"kitchen_manager"`.
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Token id, when the issuer sets one. Logged for audit.
    #[serde(default)]
    pub jti: Option<String>,
}

/// Verification settings for staff tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity service.
    pub secret: String,
    /// Allowed clock skew for `exp`.
    pub leeway_secs: u64,
}

impl JwtConfig {
    /// Load verification settings from environment variables.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `JWT_SECRET`      | **yes**  | --      |
    /// | `JWT_LEEWAY_SECS` | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty, or the leeway is not a
    /// number.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let leeway_secs = std::env::var("JWT_LEEWAY_SECS")
            .map(|v| v.parse().expect("JWT_LEEWAY_SECS must be a valid u64"))
            .unwrap_or(DEFAULT_LEEWAY_SECS);

        Self {
            secret,
            leeway_secs,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;
        validation.set_required_spec_claims(&["exp"]);
        validation
    }
}

/// Verify a staff token and return its claims.
///
/// Rejects bad signatures, algorithms other than HS256, and tokens past
/// `exp` plus the configured leeway.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<StaffClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<StaffClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &config.validation(),
    )?;
    Ok(token_data.claims)
}
