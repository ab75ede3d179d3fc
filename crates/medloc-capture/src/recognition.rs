//! Query text from image text recognition and speech transcripts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capture errors.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("No transcript in speech result")]
    NoTranscript,
}

pub type CaptureResult<T> = Result<T, CaptureError>;

/// Clean up raw recognized text into a single-line query.
///
/// Runs of line breaks become one space, any run of two or more whitespace
/// characters becomes one space, and the ends are trimmed. A lone tab
/// between words is left alone.
pub fn refine_ocr_text(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' {
            while chars.peek() == Some(&'\n') {
                chars.next();
            }
            joined.push(' ');
        } else {
            joined.push(c);
        }
    }

    let mut refined = String::with_capacity(joined.len());
    let mut chars = joined.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            refined.push(' ');
        } else {
            refined.push(c);
        }
    }

    refined.trim().to_string()
}

/// Query to use after image recognition: the refined text, or the current
/// query when recognition produced nothing usable.
pub fn query_from_ocr(text: &str, current_query: &str) -> String {
    let refined = refine_ocr_text(text);
    if refined.is_empty() {
        current_query.to_string()
    } else {
        refined
    }
}

/// Speech recognition result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechResult {
    /// One entry per recognized phrase, each with ranked alternatives
    pub results: Vec<Vec<SpeechAlternative>>,
}

/// One candidate transcript for a phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechAlternative {
    pub transcript: String,
    pub confidence: Option<f64>,
}

impl SpeechResult {
    /// Top alternative of the first phrase.
    pub fn transcript(&self) -> Option<&str> {
        self.results
            .first()
            .and_then(|alternatives| alternatives.first())
            .map(|alt| alt.transcript.as_str())
    }
}

/// Parse a speech recognition payload and take its top transcript.
///
/// Text around the JSON object is ignored.
pub fn parse_speech_result(json: &str) -> CaptureResult<String> {
    let json_start = json.find('{').ok_or_else(|| {
        CaptureError::InvalidFormat("No JSON object found in response".into())
    })?;
    let json_end = json.rfind('}').ok_or_else(|| {
        CaptureError::InvalidFormat("No closing brace found in response".into())
    })?;
    if json_end < json_start {
        return Err(CaptureError::InvalidFormat(
            "Closing brace before opening brace".into(),
        ));
    }

    let result: SpeechResult = serde_json::from_str(&json[json_start..=json_end])?;
    result
        .transcript()
        .map(str::to_string)
        .ok_or(CaptureError::NoTranscript)
}

/// Query to use after speech recognition. Failures are silent: the current
/// query is kept.
///
/// Unlike [`parse_speech_result`], which returns the transcript untouched,
/// this trims it and treats a blank transcript as a failure, so a silent
/// recording never clears the search box.
pub fn query_from_speech(json: &str, current_query: &str) -> String {
    match parse_speech_result(json) {
        Ok(transcript) if !transcript.trim().is_empty() => transcript.trim().to_string(),
        _ => current_query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refine_joins_lines() {
        assert_eq!(refine_ocr_text("Dolo\n650\n\ntablet\n"), "Dolo 650 tablet");
    }

    #[test]
    fn test_refine_collapses_whitespace() {
        assert_eq!(refine_ocr_text("  Allegra    120  mg  "), "Allegra 120 mg");
        assert_eq!(refine_ocr_text("Dolo \n 650"), "Dolo 650");
        assert_eq!(refine_ocr_text("Rx:\r\n\r\nCrocin"), "Rx: Crocin");
    }

    #[test]
    fn test_refine_keeps_single_tab() {
        assert_eq!(refine_ocr_text("Dolo\t650"), "Dolo\t650");
    }

    #[test]
    fn test_refine_empty() {
        assert_eq!(refine_ocr_text(""), "");
        assert_eq!(refine_ocr_text(" \n\n \t"), "");
    }

    #[test]
    fn test_query_from_ocr() {
        assert_eq!(query_from_ocr("Dolo 650\n", "old"), "Dolo 650");
        assert_eq!(query_from_ocr("\n\n", "old"), "old");
    }

    #[test]
    fn test_parse_speech_result() {
        let json = r#"{"results": [[{"transcript": "dolo six fifty", "confidence": 0.92},
                                    {"transcript": "dollar six fifty", "confidence": 0.4}]]}"#;
        assert_eq!(parse_speech_result(json).unwrap(), "dolo six fifty");
    }

    #[test]
    fn test_parse_speech_with_surrounding_text() {
        let json = r#"result: {"results": [[{"transcript": "allegra"}]]} done"#;
        assert_eq!(parse_speech_result(json).unwrap(), "allegra");
    }

    #[test]
    fn test_parse_speech_errors() {
        assert!(matches!(
            parse_speech_result("no json here"),
            Err(CaptureError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_speech_result("} oops {"),
            Err(CaptureError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_speech_result(r#"{"results": []}"#),
            Err(CaptureError::NoTranscript)
        ));
        assert!(matches!(
            parse_speech_result(r#"{"results": [[]]}"#),
            Err(CaptureError::NoTranscript)
        ));
        assert!(matches!(
            parse_speech_result(r#"{"results": "nope"}"#),
            Err(CaptureError::JsonParse(_))
        ));
    }

    #[test]
    fn test_query_from_speech_is_silent_on_failure() {
        assert_eq!(query_from_speech("garbage", "Dolo"), "Dolo");
        assert_eq!(
            query_from_speech(r#"{"results": [[{"transcript": "  "}]]}"#, "Dolo"),
            "Dolo"
        );
        assert_eq!(
            query_from_speech(r#"{"results": [[{"transcript": " crocin "}]]}"#, "Dolo"),
            "crocin"
        );
    }
}
