//! Best-effort decoding of bearer-token claims for display.
//!
//! TRUST
//! =====
//! Nothing here verifies a signature. Decoded claims are only good for showing
//! who appears to be signed in; authorization is the server's job and any
//! decision based on these values would be trivially forgeable.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// URL-safe alphabet that accepts the payload with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Unverified claims carried in the token payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Claims {
    /// Identity of the token holder (`sub`).
    #[serde(rename = "sub", deserialize_with = "deserialize_subject")]
    pub subject: String,
    /// Email added by the backend as an extra claim, when present.
    #[serde(default)]
    pub email: Option<String>,
    /// Every other claim (`exp`, `iat`, `jti`, ...), untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// Returns `None` when the token does not have exactly three segments, the payload is
/// not base64url, or the payload is not a JSON object with a `sub` claim.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }
    let bytes = PAYLOAD_ENGINE.decode(payload.trim()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

fn deserialize_subject<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("unsupported subject claim: {other}"))),
    }
}
