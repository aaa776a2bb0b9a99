//! Share-string codec for transferring a plan between machines.
//!
//! The format is the original web app's URL fragment: the plan serialized as
//! JSON, base64-encoded, optionally percent-encoded, optionally carried behind
//! the `#` of a full URL. Decoding tolerates all of those shapes; encoding
//! produces plain base64.

use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine as _,
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;
use tracing::debug;

use crate::domain::AppState;

/// Characters that cannot ride in a URL fragment unescaped.
const FRAGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'%');

/// What went wrong while decoding a share string.
#[derive(Debug, Error)]
pub enum ShareDecodeError {
    #[error("share string is empty")]
    Empty,
    #[error("invalid percent-encoding: {0}")]
    PercentEncoding(#[from] std::str::Utf8Error),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("decoded payload is not a valid plan: {0}")]
    Plan(#[from] serde_json::Error),
}

/// Encode a plan as a share string (base64 of the JSON serialization).
pub fn encode(state: &AppState) -> Result<String, serde_json::Error> {
    Ok(STANDARD.encode(serde_json::to_string(state)?))
}

/// Encode a plan and append it to `base_url` as a fragment.
pub fn encode_as_url(state: &AppState, base_url: &str) -> Result<String, serde_json::Error> {
    let payload = encode(state)?;
    let escaped = utf8_percent_encode(&payload, FRAGMENT_SET);
    Ok(format!("{}#{}", base_url.trim_end_matches('#'), escaped))
}

/// Decode a share string back into a plan.
///
/// Accepts a bare base64 payload, a percent-encoded one, or a full URL whose
/// fragment carries it. The typed decode fails closed: the payload must parse
/// as a complete plan (a `slots` field above all), otherwise the error names
/// the stage that rejected it.
pub fn decode(input: &str) -> Result<AppState, ShareDecodeError> {
    let fragment = match input.rsplit_once('#') {
        Some((_, fragment)) => fragment,
        None => input,
    };
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(ShareDecodeError::Empty);
    }

    let unescaped = percent_decode_str(fragment).decode_utf8()?;

    // The original app emitted the standard alphabet (btoa); tolerate the
    // url-safe one as well since these strings travel through chat apps.
    let bytes = match STANDARD.decode(unescaped.as_bytes()) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("standard base64 decode failed ({err}), retrying url-safe");
            URL_SAFE_NO_PAD.decode(unescaped.as_bytes())?
        }
    };

    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}
