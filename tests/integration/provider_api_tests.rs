/*!
 * Integration tests for the Google providers over a local HTTP server
 */

use std::time::Duration;

use smart_translator::providers::google::GoogleTranslate;
use smart_translator::providers::google_tts::GoogleTts;
use smart_translator::providers::{DetectionProvider, SpeechProvider, TranslationProvider, TranslationRequest};
use smart_translator::ProviderError;

use crate::common::canned_server::{CannedResponse, CannedServer};
use crate::common::init_logging;

fn translate_client(server: &CannedServer) -> GoogleTranslate {
    init_logging();
    GoogleTranslate::new(server.endpoint.clone(), "test-agent", Duration::from_secs(5))
}

fn tts_client(server: &CannedServer, max_chunk_chars: usize) -> GoogleTts {
    init_logging();
    GoogleTts::new(server.endpoint.clone(), "test-agent", Duration::from_secs(5), max_chunk_chars)
}

/// Segments are concatenated and the query carries both languages
#[tokio::test]
async fn test_googleTranslate_withSegments_shouldConcatenateText() {
    let server = CannedServer::start(vec![CannedResponse::json(
        200,
        r#"[[["Bonjour. ","Hello. ",null,null,1],["Au revoir","Goodbye",null,null,1]],null,"en"]"#,
    )])
    .await;

    let result = translate_client(&server)
        .translate(&TranslationRequest::explicit("Hello. Goodbye", "en", "fr"))
        .await
        .unwrap();

    assert_eq!(result, "Bonjour. Au revoir");
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("/translate_a/single?"));
    assert!(requests[0].contains("client=gtx"));
    assert!(requests[0].contains("sl=en"));
    assert!(requests[0].contains("tl=fr"));
}

/// Non-2xx answers become API errors with the status code
#[tokio::test]
async fn test_googleTranslate_withRateLimit_shouldReturnApiError() {
    let server = CannedServer::start(vec![CannedResponse::json(429, "Too Many Requests")]).await;

    let result = translate_client(&server)
        .translate(&TranslationRequest::auto("Hello", "fr"))
        .await;

    match result {
        Err(ProviderError::ApiError { status_code, message }) => {
            assert_eq!(status_code, 429);
            assert!(message.contains("Too Many Requests"));
        }
        other => panic!("expected an API error, got {:?}", other),
    }
    assert!(server.requests()[0].contains("sl=auto"));
}

/// Detection lower-cases the reported source language
#[tokio::test]
async fn test_googleDetect_withReportedSource_shouldReturnLowercaseCode() {
    let server = CannedServer::start(vec![CannedResponse::json(
        200,
        r#"[[["Hello","你好",null,null,1]],null,"zh-CN"]"#,
    )])
    .await;

    let code = translate_client(&server).detect("你好").await.unwrap();

    assert_eq!(code, "zh-cn");
}

/// An answer without element 2 cannot be used for detection
#[tokio::test]
async fn test_googleDetect_withoutSourceElement_shouldReturnParseError() {
    let server = CannedServer::start(vec![CannedResponse::json(200, r#"[[["Hello","Hello",null,null,1]]]"#)]).await;

    let result = translate_client(&server).detect("Hello").await;

    assert!(matches!(result, Err(ProviderError::ParseError(_))), "got {:?}", result);
}

/// Chunk audio is concatenated in request order
#[tokio::test]
async fn test_googleTts_withTwoChunks_shouldConcatenateAudio() {
    let server = CannedServer::start(vec![
        CannedResponse::audio(b"ID3-first"),
        CannedResponse::audio(b"-second"),
    ])
    .await;

    let audio = tts_client(&server, 20)
        .synthesize("Hello there. General Kenobi", "zh-cn")
        .await
        .unwrap();

    assert_eq!(audio, b"ID3-first-second");
    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.starts_with("/translate_tts?")));
    assert!(requests.iter().all(|r| r.contains("total=2") && r.contains("tl=zh-CN")));
    assert!(requests[0].contains("idx=0"));
    assert!(requests[1].contains("idx=1"));
}

/// A failing chunk aborts synthesis with an API error
#[tokio::test]
async fn test_googleTts_withServerError_shouldReturnApiError() {
    let server = CannedServer::start(vec![CannedResponse::json(500, "backend unavailable")]).await;

    let result = tts_client(&server, 100).synthesize("Hello", "en").await;

    assert!(
        matches!(result, Err(ProviderError::ApiError { status_code: 500, .. })),
        "got {:?}",
        result
    );
}
