use serde_json::json;
use writerai::api::response::extract_completion_text;
use writerai::error::WriterAiError;

#[test]
fn test_extract_text_when_present() {
    let response = json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": "Once upon a time" }]
            }
        }]
    });

    let text = extract_completion_text(&response).unwrap();
    assert_eq!(text, "Once upon a time");
}

#[test]
fn test_extract_text_returns_first_part_of_first_candidate() {
    let response = json!({
        "candidates": [
            { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
            { "content": { "parts": [{ "text": "other candidate" }] } }
        ]
    });

    let text = extract_completion_text(&response).unwrap();
    assert_eq!(text, "first");
}

#[test]
fn test_missing_candidates_is_an_error() {
    let response = json!({ "promptFeedback": {} });
    let result = extract_completion_text(&response);
    assert!(matches!(
        result,
        Err(WriterAiError::ExternalService { .. })
    ));
}

#[test]
fn test_empty_candidates_is_an_error() {
    let response = json!({ "candidates": [] });
    assert!(extract_completion_text(&response).is_err());
}

#[test]
fn test_missing_text_field_is_an_error() {
    let response = json!({
        "candidates": [{ "content": { "parts": [{}] } }]
    });
    assert!(extract_completion_text(&response).is_err());
}

#[test]
fn test_non_string_text_is_an_error() {
    let response = json!({
        "candidates": [{ "content": { "parts": [{ "text": 42 }] } }]
    });
    assert!(extract_completion_text(&response).is_err());
}
