//! End-to-end redaction passes against mocked backend services.

use dlp_client::{DlpClient, DlpCredentials};
use presidio_client::PresidioClient;
use redaction::{
    CapturedValue, ErrorCapture, GoogleDlpDetector, PiiDetector, PiiRedactor, PresidioDetector,
    RedactionError, RedactionLevel, RedactionMethod, RedactionOptions, Span, SpanContext, Trace,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn trace_with_output(output: &str) -> Trace {
    Trace {
        trace_id: "trace_1".to_string(),
        input: Some(CapturedValue::text("no pii here")),
        output: Some(CapturedValue::text(output)),
        error: None,
    }
}

fn presidio_redactor(endpoint: String) -> PiiRedactor {
    PiiRedactor::with_detectors(
        None,
        Some(Box::new(PresidioDetector::new(PresidioClient::new(endpoint)))),
    )
}

fn dlp_detector(endpoint: String) -> Box<dyn PiiDetector> {
    let credentials =
        DlpCredentials::from_json(r#"{"project_id": "test-project", "api_key": "k"}"#).unwrap();
    Box::new(GoogleDlpDetector::new(DlpClient::with_base_url(
        credentials,
        endpoint,
    )))
}

#[tokio::test]
async fn presidio_anonymizes_the_matching_leaf_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/presidio/pii_detection/evaluate"))
        .and(body_partial_json(json!({
            "data": [ { "input": "Call me at 555-123-4567" } ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "status": "processed",
                "raw_response": { "anonymized": "Call me at [REDACTED]" },
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "status": "skipped" }
        ])))
        .mount(&server)
        .await;

    let redactor = presidio_redactor(server.uri());
    let mut trace = trace_with_output("Call me at 555-123-4567");
    let options = RedactionOptions::new(RedactionLevel::Essential);

    redactor.redact_pii(&mut trace, &mut [], &options).await.unwrap();

    assert_eq!(
        trace.output.unwrap().value,
        json!("Call me at [REDACTED]")
    );
    assert_eq!(trace.input.unwrap().value, json!("no pii here"));
}

#[tokio::test]
async fn dlp_redacts_one_stacktrace_frame_and_leaves_the_rest() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "item": { "value": "user email a@b.com" },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "findings": [
                    { "location": { "codepointRange": { "start": 11, "end": 18 } } }
                ]
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": {} })))
        .mount(&server)
        .await;

    let redactor = PiiRedactor::with_detectors(Some(dlp_detector(server.uri())), None);
    let mut trace = Trace {
        trace_id: "trace_1".to_string(),
        input: None,
        output: None,
        error: None,
    };
    let mut spans = [Span {
        span_id: "span_1".to_string(),
        input: None,
        output: None,
        error: Some(ErrorCapture {
            has_exception: true,
            message: "lookup failed".to_string(),
            stacktrace: vec!["at foo()".to_string(), "user email a@b.com".to_string()],
        }),
        contexts: vec![],
    }];

    let options = RedactionOptions {
        level: RedactionLevel::Strict,
        enforced: true,
        main_method: Some(RedactionMethod::GoogleDlp),
    };
    redactor
        .redact_pii(&mut trace, &mut spans, &options)
        .await
        .unwrap();

    let error = spans[0].error.as_ref().unwrap();
    assert_eq!(error.stacktrace[0], "at foo()");
    assert_eq!(error.stacktrace[1], "user email [REDACTED]");
    assert_eq!(error.message, "lookup failed");
}

#[tokio::test]
async fn span_context_leaves_are_scanned_in_every_shape() {
    let server = MockServer::start().await;

    // The evaluator upcases nothing and anonymizes everything it is sent.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "status": "processed",
                "raw_response": { "anonymized": "[REDACTED]" },
            }
        ])))
        .mount(&server)
        .await;

    let redactor = presidio_redactor(server.uri());
    let mut trace = Trace {
        trace_id: "trace_1".to_string(),
        input: None,
        output: None,
        error: None,
    };
    let mut spans = [Span {
        span_id: "span_1".to_string(),
        input: None,
        output: None,
        error: None,
        contexts: vec![
            SpanContext {
                document_id: None,
                content: json!(["alice@example.com", 7]),
            },
            SpanContext {
                document_id: None,
                content: json!({ "owner": "Bob", "score": 1.5 }),
            },
            SpanContext {
                document_id: None,
                content: json!("call 555-123-4567"),
            },
        ],
    }];

    let options = RedactionOptions::new(RedactionLevel::Strict);
    redactor
        .redact_pii(&mut trace, &mut spans, &options)
        .await
        .unwrap();

    assert_eq!(spans[0].contexts[0].content, json!(["[REDACTED]", 7]));
    assert_eq!(
        spans[0].contexts[1].content,
        json!({ "owner": "[REDACTED]", "score": 1.5 })
    );
    assert_eq!(spans[0].contexts[2].content, json!("[REDACTED]"));
}

#[tokio::test]
async fn unenforced_pass_with_no_backends_resolves_without_mutation() {
    let redactor = PiiRedactor::with_detectors(None, None);
    let mut trace = trace_with_output("Call me at 555-123-4567");

    let options = RedactionOptions::new(RedactionLevel::Essential);
    redactor.redact_pii(&mut trace, &mut [], &options).await.unwrap();

    assert_eq!(trace.output.unwrap().value, json!("Call me at 555-123-4567"));
}

#[tokio::test]
async fn enforced_pass_with_no_backends_rejects_with_configuration_error() {
    let redactor = PiiRedactor::with_detectors(None, None);
    let mut trace = trace_with_output("Call me at 555-123-4567");

    let mut options = RedactionOptions::new(RedactionLevel::Essential);
    options.enforced = true;
    let err = redactor
        .redact_pii(&mut trace, &mut [], &options)
        .await
        .unwrap_err();

    match err {
        RedactionError::MissingConfiguration { method, var } => {
            assert_eq!(method, RedactionMethod::Presidio);
            assert_eq!(var, "EVALUATOR_ENDPOINT");
        }
        other => panic!("expected MissingConfiguration, got {other:?}"),
    }
    assert_eq!(trace.output.unwrap().value, json!("Call me at 555-123-4567"));
}

#[tokio::test]
async fn unenforced_primary_failure_without_fallback_leaves_text_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("inspection unavailable"))
        .mount(&server)
        .await;

    let redactor = PiiRedactor::with_detectors(Some(dlp_detector(server.uri())), None);
    let mut trace = trace_with_output("Call me at 555-123-4567");

    let options = RedactionOptions {
        level: RedactionLevel::Essential,
        enforced: false,
        main_method: Some(RedactionMethod::GoogleDlp),
    };
    redactor.redact_pii(&mut trace, &mut [], &options).await.unwrap();

    assert_eq!(trace.output.unwrap().value, json!("Call me at 555-123-4567"));
}

#[tokio::test]
async fn failing_primary_falls_back_to_the_other_backend() {
    let presidio_server = MockServer::start().await;
    let dlp_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("evaluator down"))
        .mount(&presidio_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "findings": [
                    { "location": { "codepointRange": { "start": 8, "end": 15 } } }
                ]
            }
        })))
        .mount(&dlp_server)
        .await;

    let redactor = PiiRedactor::with_detectors(
        Some(dlp_detector(dlp_server.uri())),
        Some(Box::new(PresidioDetector::new(PresidioClient::new(
            presidio_server.uri(),
        )))),
    );

    let mut trace = Trace {
        trace_id: "trace_1".to_string(),
        input: None,
        output: Some(CapturedValue::text("contact a@b.com")),
        error: None,
    };
    let mut options = RedactionOptions::new(RedactionLevel::Essential);
    options.enforced = true;

    redactor.redact_pii(&mut trace, &mut [], &options).await.unwrap();

    assert_eq!(trace.output.unwrap().value, json!("contact [REDACTED]"));
}
