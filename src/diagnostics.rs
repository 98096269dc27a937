//! Credential diagnostics.
//!
//! Decodes the configured bearer token (a JWT) to report who it belongs to
//! and whether it has expired. The signature is not verified: this only
//! feeds startup logs and never gates a submission.

use crate::error::TokenError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawClaims {
    sub: Option<String>,
    email: Option<String>,
    exp: Option<i64>,
    iat: Option<i64>,
}

/// Claims of interest read from a JWT payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: Option<String>,
    pub email: Option<String>,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenClaims {
    /// A token without an expiry claim is treated as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at < now,
            None => true,
        }
    }
}

/// Decode the payload segment of a JWT.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut segments = token.trim().split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(TokenError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let raw: RawClaims = serde_json::from_slice(&bytes)?;

    Ok(TokenClaims {
        subject: raw.sub,
        email: raw.email,
        issued_at: raw.iat.and_then(timestamp),
        expires_at: raw.exp.and_then(timestamp),
    })
}

fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

/// What a diagnostics collaborator found out about a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialReport {
    pub claims: TokenClaims,
    pub expired: bool,
}

/// Inspects credentials for logging purposes.
pub trait CredentialDiagnostics: Send + Sync {
    fn inspect(&self, token: &str) -> Result<CredentialReport, TokenError>;
}

/// Reads JWT claims and compares the expiry with the wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct JwtInspector;

impl CredentialDiagnostics for JwtInspector {
    fn inspect(&self, token: &str) -> Result<CredentialReport, TokenError> {
        let claims = decode_claims(token)?;
        let expired = claims.is_expired_at(Utc::now());
        Ok(CredentialReport { claims, expired })
    }
}

/// Log what `diagnostics` can tell about the configured token.
pub fn log_credential_report(diagnostics: &dyn CredentialDiagnostics, token: Option<&str>) {
    let Some(token) = token else {
        tracing::info!("No lead API token configured");
        return;
    };

    match diagnostics.inspect(token) {
        Ok(report) => {
            tracing::debug!(
                "Lead API token subject: {}, email: {}",
                report.claims.subject.as_deref().unwrap_or("<none>"),
                report.claims.email.as_deref().unwrap_or("<none>")
            );
            match (report.expired, report.claims.expires_at) {
                (true, Some(at)) => tracing::warn!("Lead API token expired at {}", at),
                (true, None) => tracing::warn!("Lead API token has no expiry claim"),
                (false, Some(at)) => tracing::info!("Lead API token valid until {}", at),
                (false, None) => {}
            }
        }
        Err(e) => tracing::debug!("Lead API token could not be inspected: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_claims() {
        let token = token_with(
            r#"{"sub":"4b0e733b","email":"demo@example.com","iat":1757451458,"exp":1757455058}"#,
        );
        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.subject.as_deref(), Some("4b0e733b"));
        assert_eq!(claims.email.as_deref(), Some("demo@example.com"));
        assert_eq!(claims.expires_at.unwrap().timestamp(), 1757455058);
        assert_eq!(claims.issued_at.unwrap().timestamp(), 1757451458);
    }

    #[test]
    fn test_expiry() {
        let token = token_with(r#"{"exp":1757455058}"#);
        let claims = decode_claims(&token).unwrap();

        let before = Utc.timestamp_opt(1757455000, 0).unwrap();
        let after = Utc.timestamp_opt(1757455100, 0).unwrap();
        assert!(!claims.is_expired_at(before));
        assert!(claims.is_expired_at(after));
    }

    #[test]
    fn test_missing_exp_counts_as_expired() {
        let claims = decode_claims(&token_with(r#"{"sub":"x"}"#)).unwrap();
        assert!(claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(decode_claims("not-a-jwt"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a..c"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a.b.c.d"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Encoding(_))));
        assert!(matches!(
            decode_claims(&format!("a.{}.c", URL_SAFE_NO_PAD.encode("[1,2]"))),
            Err(TokenError::Payload(_))
        ));
    }

    #[test]
    fn test_inspector_reports_expired_token() {
        let report = JwtInspector
            .inspect(&token_with(r#"{"exp":1000}"#))
            .unwrap();
        assert!(report.expired);
    }
}
