use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::error;

type HmacSha256 = Hmac<Sha256>;

/// Verify the `x-line-signature` header value against the raw request body.
///
/// The signature is the base64-encoded HMAC-SHA256 of the body keyed by the
/// channel secret. Comparison happens in constant time via `Mac::verify_slice`.
pub fn verify_signature(channel_secret: &str, signature: &str, body: &[u8]) -> bool {
    let Ok(received) = BASE64.decode(signature) else {
        error!("Signature is not valid base64");
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return false;
        }
    };
    mac.update(body);

    mac.verify_slice(&received).is_ok()
}

pub fn compute_signature(channel_secret: &str, body: &[u8]) -> String {
    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return String::new();
        }
    };
    mac.update(body);
    BASE64.encode(mac.finalize().into_bytes())
}
