//! Link-based sharing without server storage.
//!
//! A shared location looks like `<origin><path>#share=<token>` where the token
//! is the URL-safe base64 form of the itinerary's JSON.

pub mod codec;

pub use codec::{
    decode_location, decode_token, encode_token, share_url, strip_fragment, token_from_location,
    SHARE_MARKER,
};
