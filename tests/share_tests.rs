mod common;

use std::time::{Duration, Instant};

use base64::{engine::general_purpose, Engine};
use common::{itinerary, kyoto};
use evasion_planner::{
    core::SHARE_LOADED_MESSAGE,
    error::SHARE_LINK_INVALID_MESSAGE,
    share::{decode_location, decode_token, encode_token, share_url, token_from_location},
    LocationOutcome, PlannerSession,
};
use url::Url;

fn page() -> Url {
    Url::parse("https://planner.example/evasion/?lang=fr").unwrap()
}

#[test]
fn test_shared_two_day_trip_is_restored() {
    let shared = itinerary("Lisbonne", 2);
    let link = share_url(&page(), &shared).unwrap();
    assert!(link.fragment().unwrap().starts_with("share="));

    let now = Instant::now();
    let mut session = PlannerSession::new(page());
    let outcome = session.load_location_at(link, now);

    assert_eq!(outcome, LocationOutcome::Loaded);
    assert_eq!(session.itinerary(), Some(&shared));
    assert_eq!(session.form().days, 2);
    assert_eq!(session.form().destination, "Lisbonne");
    assert!(session.error().is_none());

    assert_eq!(session.location().fragment(), None);
    assert_eq!(session.location().query(), Some("lang=fr"));
    assert_eq!(session.location().path(), "/evasion/");

    let toasts = session.active_toasts(now);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, SHARE_LOADED_MESSAGE);
    assert!(session.active_toasts(now + Duration::from_secs(4)).is_empty());
}

#[test]
fn test_invalid_token_is_rejected() {
    let mut session = PlannerSession::new(page());
    let link = Url::parse("https://planner.example/evasion/#share=not-valid-base64").unwrap();

    assert_eq!(session.load_location(link), LocationOutcome::Rejected);
    assert_eq!(session.error(), Some(SHARE_LINK_INVALID_MESSAGE));
    assert!(session.itinerary().is_none());
}

#[test]
fn test_rejected_link_keeps_current_itinerary() {
    let mut session = PlannerSession::new(page());
    let good = share_url(&page(), &kyoto()).unwrap();
    assert_eq!(session.load_location(good), LocationOutcome::Loaded);

    let bad = Url::parse("https://planner.example/evasion/#share=%%%").unwrap();
    assert_eq!(session.load_location(bad), LocationOutcome::Rejected);
    assert_eq!(session.itinerary(), Some(&kyoto()));
}

#[test]
fn test_token_round_trip_keeps_unicode() {
    let mut shared = kyoto();
    shared.summary = "Thé matcha, ryokans et cerisiers 🌸 à Kyōto".to_string();

    let token = encode_token(&shared).unwrap();
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert_eq!(decode_token(&token).unwrap(), shared);
}

#[test]
fn test_decoding_one_token_twice_gives_the_same_itinerary() {
    let token = encode_token(&kyoto()).unwrap();

    let first = decode_token(&token).unwrap();
    let second = decode_token(&token).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, kyoto());

    let link = share_url(&page(), &kyoto()).unwrap();
    assert_eq!(
        decode_location(&link).unwrap().unwrap(),
        decode_location(&link).unwrap().unwrap()
    );
}

#[test]
fn test_resharing_reproduces_the_link() {
    let first = share_url(&page(), &kyoto()).unwrap();
    let restored = decode_location(&first).unwrap().unwrap();
    let second = share_url(&page(), &restored).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_decoder_accepts_other_token_shapes() {
    let shared = itinerary("Rome", 1);
    let json = serde_json::to_vec(&shared).unwrap();

    let padded = general_purpose::STANDARD.encode(&json);
    assert_eq!(decode_token(&padded).unwrap(), shared);

    let percent_encoded = urlencoding::encode(&padded).into_owned();
    assert_eq!(decode_token(&percent_encoded).unwrap(), shared);
}

#[test]
fn test_token_must_hold_an_itinerary() {
    let not_an_itinerary = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"hello":"world"}"#);
    let err = decode_token(&not_an_itinerary).unwrap_err();
    assert_eq!(err.user_message(), SHARE_LINK_INVALID_MESSAGE);
}

#[test]
fn test_location_without_share_marker() {
    let plain = Url::parse("https://planner.example/evasion/#top").unwrap();
    assert!(token_from_location(&plain).is_none());
    assert!(decode_location(&plain).is_none());
}
