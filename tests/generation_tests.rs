mod common;

use common::{completion_body, itinerary, kyoto, StubGenerator};
use evasion_planner::{
    error::{GENERATION_FAILED_MESSAGE, MISSING_DESTINATION_MESSAGE},
    ErrorKind, Planner, PlannerConfig, PlannerRequest, PlannerSession, TravelStyle,
};
use mockito::Matcher;
use serde_json::json;
use url::Url;

fn location() -> Url {
    Url::parse("https://planner.example/evasion/").unwrap()
}

fn planner_for(server: &mockito::ServerGuard) -> Planner {
    let config = PlannerConfig::new("test-key")
        .with_base_url(server.url())
        .with_model("test-model");
    Planner::new(config).unwrap()
}

#[tokio::test]
async fn test_kyoto_relaxation_trip() {
    let mut server = mockito::Server::new_async().await;
    let content = serde_json::to_string(&kyoto()).unwrap();
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "test-model",
            "response_format": { "type": "json_schema" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&content))
        .expect(1)
        .create_async()
        .await;

    let planner = planner_for(&server);
    let mut session = PlannerSession::new(location());
    session.form_mut().destination = "Kyoto".to_string();
    session.form_mut().days = 3;
    session.form_mut().style = TravelStyle::Relaxation;

    let itinerary = session.submit(&planner).await.unwrap().clone();

    let days: Vec<u32> = itinerary.daily_plans.iter().map(|plan| plan.day).collect();
    assert_eq!(days, vec![1, 2, 3]);
    assert_eq!(itinerary.destination, "Kyoto");
    assert!(session.error().is_none());
    assert!(!session.is_loading());
    assert!(session.share_url().is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_failure_shows_generic_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body(r#"{"error":{"message":"upstream exploded"}}"#)
        .expect(1)
        .create_async()
        .await;

    let planner = planner_for(&server);
    let mut session = PlannerSession::new(location());
    session.form_mut().destination = "Kyoto".to_string();

    let err = session.submit(&planner).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Generation);
    assert_eq!(session.error(), Some(GENERATION_FAILED_MESSAGE));
    assert!(session.itinerary().is_none());
    assert!(!session.is_loading());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_destination_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let planner = planner_for(&server);
    let mut session = PlannerSession::new(location());
    session.form_mut().destination = "   ".to_string();

    let err = session.submit(&planner).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InputValidation);
    assert_eq!(session.error(), Some(MISSING_DESTINATION_MESSAGE));
    assert!(session.itinerary().is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fenced_answer_is_accepted() {
    let content = format!(
        "```json\n{}\n```",
        serde_json::to_string(&itinerary("Porto", 2)).unwrap()
    );
    let planner = Planner::with_generator(StubGenerator::raw(&content));

    let itinerary = planner
        .generate(&PlannerRequest::new("Porto", 2, TravelStyle::Cultural))
        .await
        .unwrap();
    assert_eq!(itinerary.day_count(), 2);
}

#[tokio::test]
async fn test_malformed_answers_are_generation_failures() {
    let request = PlannerRequest::new("Kyoto", 3, TravelStyle::Relaxation);

    for content in [
        "pas du JSON",
        r#"{"tripTitle":"Kyoto"}"#,
        "",
    ] {
        let planner = Planner::with_generator(StubGenerator::raw(content));
        let err = planner.generate(&request).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generation, "content: {content:?}");
        assert_eq!(err.user_message(), GENERATION_FAILED_MESSAGE);
    }
}

#[tokio::test]
async fn test_wrong_day_count_is_rejected() {
    let request = PlannerRequest::new("Kyoto", 3, TravelStyle::Relaxation);

    let short = Planner::with_generator(StubGenerator::answering(&itinerary("Kyoto", 2)));
    assert_eq!(
        short.generate(&request).await.unwrap_err().kind(),
        ErrorKind::Generation
    );

    let mut duplicated = itinerary("Kyoto", 3);
    duplicated.daily_plans[2].day = 2;
    let duplicated = Planner::with_generator(StubGenerator::answering(&duplicated));
    assert!(duplicated.generate(&request).await.is_err());
}

#[tokio::test]
async fn test_day_bounds() {
    for days in [1, 21] {
        let generator = StubGenerator::answering(&itinerary("Oslo", days));
        let planner = Planner::with_generator(generator.clone());
        let request = PlannerRequest::new("Oslo", days, TravelStyle::Adventure);

        let itinerary = planner.generate(&request).await.unwrap();
        assert_eq!(itinerary.day_count(), days as usize);
        assert_eq!(generator.calls(), 1);
    }

    for days in [0, 22] {
        let generator = StubGenerator::answering(&itinerary("Oslo", 3));
        let planner = Planner::with_generator(generator.clone());
        let request = PlannerRequest::new("Oslo", days, TravelStyle::Adventure);

        let err = planner.generate(&request).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation);
        assert_eq!(generator.calls(), 0);
    }
}

#[tokio::test]
async fn test_new_submission_replaces_previous_itinerary() {
    let mut session = PlannerSession::new(location());
    session.form_mut().destination = "Kyoto".to_string();

    let ok = Planner::with_generator(StubGenerator::answering(&kyoto()));
    session.submit(&ok).await.unwrap();
    assert!(session.itinerary().is_some());

    let failing = Planner::with_generator(StubGenerator::failing("timeout"));
    assert!(session.submit(&failing).await.is_err());
    assert!(session.itinerary().is_none());
    assert_eq!(session.error(), Some(GENERATION_FAILED_MESSAGE));

    session.reset();
    assert!(session.error().is_none());
    assert!(session.form().destination.is_empty());
}
