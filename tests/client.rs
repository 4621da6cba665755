//! Integration tests for `TranslateClient` using wiremock HTTP mocks.

use std::time::Duration;

use assert_json_diff::assert_json_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yaraku_translate::{ClassifiedError, ClientConfig, TranslateClient, TranslationError};

fn test_client(server: &MockServer) -> TranslateClient {
    let config = ClientConfig::new("test-key", format!("{}/translate", server.uri()))
        .with_timeout_ms(5_000);
    TranslateClient::new(config).expect("client construction should not fail")
}

async fn mount(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn translate_posts_payload_and_returns_translations() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "translations": ["ねこ", "犬"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let translations = client
        .translate(["Cat", "Dog"], "en", "ja")
        .await
        .expect("should translate");

    assert_eq!(translations, vec!["ねこ", "犬"]);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_json_eq!(
        sent,
        json!({
            "authKey": "test-key",
            "texts": ["Cat", "Dog"],
            "textLanguage": "en",
            "translationLanguage": "ja"
        })
    );
}

#[tokio::test]
async fn known_error_code_is_classified() {
    let server = MockServer::start().await;
    mount(
        &server,
        404,
        json!({
            "error": { "code": "apiAccessDenied", "message": "The access token is invalid." }
        }),
    )
    .await;

    let err = test_client(&server)
        .translate(["Cat"], "en", "ja")
        .await
        .unwrap_err();

    match err {
        TranslationError::Classified(ClassifiedError::ApiAccessDenied(details)) => {
            assert_eq!(details.status, 404);
            assert_eq!(details.code, "apiAccessDenied");
            assert_eq!(details.message, "The access token is invalid.");
        }
        other => panic!("expected ApiAccessDenied, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_code_is_classified() {
    let server = MockServer::start().await;
    mount(
        &server,
        429,
        json!({
            "error": { "code": "minuteCharacterLimitExceeded", "message": "Too many characters." }
        }),
    )
    .await;

    let err = test_client(&server)
        .translate(["Cat"], "en", "ja")
        .await
        .unwrap_err();

    let classified = err.as_classified().expect("classified error");
    assert!(matches!(
        classified,
        ClassifiedError::MinuteCharacterLimitReached(_)
    ));
    assert!(classified.is_rate_limited());
}

#[tokio::test]
async fn unknown_code_on_4xx_is_client_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        402,
        json!({ "error": { "code": "unknownError", "message": "The access token is invalid." } }),
    )
    .await;

    let err = test_client(&server)
        .translate(["Cat", "Dog"], "en", "ja")
        .await
        .unwrap_err();

    match err.as_classified() {
        Some(ClassifiedError::ClientResponse(details)) => {
            assert_eq!(details.status, 402);
            assert_eq!(details.code, "unknownError");
        }
        other => panic!("expected ClientResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_code_on_5xx_is_server_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        502,
        json!({ "error": { "code": "serverFailed", "message": "Something went wrong." } }),
    )
    .await;

    let err = test_client(&server)
        .translate(["Cat", "Dog"], "en", "ja")
        .await
        .unwrap_err();

    match err.as_classified() {
        Some(ClassifiedError::ServerResponse(details)) => {
            assert_eq!(details.status, 502);
            assert_eq!(details.code, "serverFailed");
            assert_eq!(details.message, "Something went wrong.");
        }
        other => panic!("expected ServerResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn misspelled_error_fields_are_malformed() {
    let server = MockServer::start().await;
    mount(
        &server,
        502,
        json!({ "error": { "wrong-code": "x", "wrong-message": "y" } }),
    )
    .await;

    let err = test_client(&server)
        .translate(["Cat"], "en", "ja")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TranslationError::Classified(ClassifiedError::MalformedResponse { status: 502, .. })
    ));
}

#[tokio::test]
async fn non_json_error_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"),
        )
        .mount(&server)
        .await;

    let err = test_client(&server)
        .translate(["Cat"], "en", "ja")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TranslationError::Classified(ClassifiedError::MalformedResponse { status: 503, .. })
    ));
}

#[tokio::test]
async fn status_200_with_error_field_is_success() {
    let server = MockServer::start().await;
    mount(
        &server,
        200,
        json!({
            "translations": ["Gato"],
            "error": { "code": "authKeyInvalid", "message": "ignored" }
        }),
    )
    .await;

    let translations = test_client(&server)
        .translate(["Cat"], "en", "es")
        .await
        .expect("status 200 is success");

    assert_eq!(translations, vec!["Gato"]);
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}/translate", listener.local_addr().unwrap());
    drop(listener);

    let client = TranslateClient::new(ClientConfig::new("test-key", uri).with_timeout_ms(2_000))
        .expect("client construction should not fail");

    let err = client.translate(["Cat"], "en", "ja").await.unwrap_err();
    assert!(matches!(err, TranslationError::Transport(_)));
}

#[tokio::test]
async fn slow_response_times_out_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "translations": ["ねこ"] }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new("test-key", format!("{}/translate", server.uri()))
        .with_timeout_ms(50);
    let client = TranslateClient::new(config).expect("client construction should not fail");

    let err = client.translate(["Cat"], "en", "ja").await.unwrap_err();
    match err {
        TranslationError::Transport(e) => assert!(e.is_timeout(), "expected timeout, got {e:?}"),
        other => panic!("expected Transport, got {other:?}"),
    }
}
