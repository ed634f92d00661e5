//! Request signing for the NiceHash private API.
//!
//! Every private call carries an `x-auth` header of the form
//! `{api_key}:{hex(HMAC-SHA256(secret, input))}` where `input` is a
//! NUL-delimited sequence of request fields.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Fields that go into the signature, in signing order.
#[derive(Debug, Clone, Copy)]
pub struct SigningInput<'a> {
    pub api_key: &'a str,
    pub time: &'a str,
    pub nonce: &'a str,
    pub org_id: &'a str,
    pub method: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub body: Option<&'a [u8]>,
}

impl SigningInput<'_> {
    /// Build the byte string to be signed.
    ///
    /// The two empty fields after the nonce and the organization id are
    /// reserved by the API and must stay empty. The body, when present, is
    /// appended after one more NUL.
    pub fn to_bytes(&self) -> Vec<u8> {
        let fields = [
            self.api_key,
            self.time,
            self.nonce,
            "",
            self.org_id,
            "",
            self.method,
            self.path,
            self.query,
        ];

        let mut out = Vec::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(0x00);
            }
            out.extend_from_slice(field.as_bytes());
        }
        if let Some(body) = self.body {
            out.push(0x00);
            out.extend_from_slice(body);
        }
        out
    }
}

/// Lowercase hex HMAC-SHA256 of the signing input, keyed by `secret`.
pub fn sign(secret: &str, input: &SigningInput<'_>) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(&input.to_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Value for the `x-auth` header.
pub fn auth_header(api_key: &str, signature: &str) -> String {
    format!("{api_key}:{signature}")
}
