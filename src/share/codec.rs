use base64::{engine::general_purpose, Engine};
use tracing::{debug, warn};
use url::Url;

use crate::{
    error::{PlannerError, Result},
    types::Itinerary,
};

/// Prefix of a location fragment that carries a shared itinerary.
pub const SHARE_MARKER: &str = "share=";

/// Serialize an itinerary into a token safe for a URL fragment.
pub fn encode_token(itinerary: &Itinerary) -> Result<String> {
    let json = serde_json::to_vec(itinerary)?;
    Ok(general_purpose::URL_SAFE_NO_PAD.encode(json))
}

/// Restore an itinerary from a token.
///
/// Accepts both base64 alphabets, with or without padding, and tokens that
/// were percent-encoded on the way through a browser or chat client.
pub fn decode_token(token: &str) -> Result<Itinerary> {
    let token = urlencoding::decode(token)
        .map_err(|err| PlannerError::ShareLink(format!("token is not valid UTF-8: {err}")))?;

    let normalized: String = token
        .trim()
        .chars()
        .filter(|c| *c != '=')
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = general_purpose::STANDARD_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|err| PlannerError::ShareLink(format!("token is not base64: {err}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|err| PlannerError::ShareLink(format!("token does not hold an itinerary: {err}")))
}

/// `location` with its fragment replaced by `#share=<token>`.
pub fn share_url(location: &Url, itinerary: &Itinerary) -> Result<Url> {
    let token = encode_token(itinerary)?;
    let mut url = location.clone();
    url.set_fragment(Some(&format!("{SHARE_MARKER}{token}")));
    debug!(target: "evasion::share", length = token.len(), "share link built");
    Ok(url)
}

/// The share token in `location`, if its fragment carries one.
pub fn token_from_location(location: &Url) -> Option<&str> {
    location.fragment()?.strip_prefix(SHARE_MARKER)
}

/// Decode the itinerary carried by `location`.
///
/// `None` means the location holds no shared state, which is not an error.
pub fn decode_location(location: &Url) -> Option<Result<Itinerary>> {
    let token = token_from_location(location)?;
    let decoded = decode_token(token);
    if let Err(err) = &decoded {
        warn!(target: "evasion::share", error = %err, "shared link rejected");
    }
    Some(decoded)
}

/// `location` without its fragment.
pub fn strip_fragment(location: &Url) -> Url {
    let mut url = location.clone();
    url.set_fragment(None);
    url
}
