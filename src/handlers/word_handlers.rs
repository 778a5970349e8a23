//! HTTP handlers for submitting and listing words.
//! Each request makes at most one store call; every failure is mapped to
//! an [`AppError`] and backend failures are logged here before responding.

use crate::{
    errors::AppError,
    models::word::{Word, WordRejection},
    services::word_service::WordService,
};
use anyhow::Context;
use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

pub const NO_WORD_MESSAGE: &str = "No word provided";
pub const SAVED_MESSAGE: &str = "Word saved!";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WordsResponse {
    pub words: Vec<String>,
}

/// POST `/submit` — body `{"word": "<text>"}`.
///
/// The body is taken as raw bytes so that malformed JSON is reported as a
/// server error rather than an extractor rejection.
pub async fn submit_word(
    State(service): State<WordService>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    save_submission(&service, &body)
        .await
        .inspect_err(|err| log_failure("/submit", err))?;

    Ok(Json(MessageResponse {
        message: SAVED_MESSAGE,
    }))
}

/// GET `/words` — every stored word with its `.txt` suffix removed.
pub async fn list_words(
    State(service): State<WordService>,
) -> Result<Json<WordsResponse>, AppError> {
    let words = service
        .list_words()
        .await
        .map_err(AppError::from)
        .inspect_err(|err| log_failure("/words", err))?;

    Ok(Json(WordsResponse { words }))
}

async fn save_submission(service: &WordService, body: &[u8]) -> Result<(), AppError> {
    let word = parse_submission(body)?;
    service.save_word(&word).await?;
    debug!("Saved word {:?}", word.as_str());
    Ok(())
}

fn parse_submission(body: &[u8]) -> Result<Word, AppError> {
    let payload: Value =
        serde_json::from_slice(body).context("request body is not valid JSON")?;

    let Value::Object(fields) = payload else {
        return Err(AppError::backend("request body is not a JSON object"));
    };

    Word::from_field(fields.get("word")).map_err(|rejection| match rejection {
        WordRejection::Missing => AppError::validation(NO_WORD_MESSAGE),
        WordRejection::NotAString(kind) => {
            AppError::backend(format!("word must be a string, got {}", kind))
        }
    })
}

fn log_failure(route: &str, err: &AppError) {
    match err {
        AppError::Validation(message) => debug!("Rejected request to {}: {}", route, message),
        AppError::Backend(cause) => error!("Error in {}: {:#}", route, cause),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_word_field() {
        let word = parse_submission(br#"{"word": "hello", "extra": 1}"#).unwrap();
        assert_eq!(word.as_str(), "hello");
    }

    #[rstest]
    #[case::empty_object(&br#"{}"#[..])]
    #[case::empty_word(&br#"{"word": ""}"#[..])]
    #[case::null_word(&br#"{"word": null}"#[..])]
    fn missing_word_is_a_validation_error(#[case] body: &[u8]) {
        assert!(matches!(
            parse_submission(body),
            Err(AppError::Validation(message)) if message == NO_WORD_MESSAGE
        ));
    }

    #[rstest]
    #[case::not_json(&b"word=hello"[..])]
    #[case::empty_body(&b""[..])]
    #[case::json_null(&b"null"[..])]
    #[case::json_array(&br#"["hello"]"#[..])]
    #[case::number_word(&br#"{"word": 7}"#[..])]
    fn unusable_bodies_are_backend_errors(#[case] body: &[u8]) {
        assert!(matches!(parse_submission(body), Err(AppError::Backend(_))));
    }
}
