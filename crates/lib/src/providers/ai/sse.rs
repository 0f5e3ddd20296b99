//! Incremental decoder for OpenAI-style `text/event-stream` completions.

use crate::errors::PromptError;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
struct StreamChoice {
    #[serde(default)]
    delta: StreamDelta,
}

#[derive(Deserialize, Debug, Default)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Splits raw network chunks into SSE lines and yields the content deltas.
///
/// Lines may arrive split across chunks, so bytes are buffered until a newline.
#[derive(Debug, Default)]
pub(crate) struct SseDecoder {
    buffer: Vec<u8>,
    done: bool,
}

impl SseDecoder {
    /// Feeds one network chunk and returns every complete fragment it finished.
    pub(crate) fn feed(&mut self, bytes: &[u8]) -> Vec<Result<String, PromptError>> {
        if self.done {
            return Vec::new();
        }
        self.buffer.extend_from_slice(bytes);

        let mut fragments = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            if let Some(fragment) = self.decode_line(line.trim_end_matches(['\r', '\n'])) {
                fragments.push(fragment);
            }
            if self.done {
                self.buffer.clear();
                break;
            }
        }
        fragments
    }

    /// Flushes a final line that was not newline-terminated.
    pub(crate) fn finish(&mut self) -> Option<Result<String, PromptError>> {
        if self.done || self.buffer.is_empty() {
            return None;
        }
        let raw = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&raw).into_owned();
        self.decode_line(line.trim_end_matches('\r'))
    }

    fn decode_line(&mut self, line: &str) -> Option<Result<String, PromptError>> {
        // Comments, blank separators and non-data fields carry no content.
        let data = line.strip_prefix("data:")?.trim();
        if data == "[DONE]" {
            self.done = true;
            return None;
        }
        if data.is_empty() {
            return None;
        }

        match serde_json::from_str::<StreamChunk>(data) {
            Ok(StreamChunk {
                error: Some(error), ..
            }) => Some(Err(PromptError::AiApi(error.to_string()))),
            Ok(chunk) => chunk
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content)
                .filter(|content| !content.is_empty())
                .map(Ok),
            Err(e) => Some(Err(PromptError::AiStream(format!(
                "invalid stream payload '{data}': {e}"
            )))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(results: Vec<Result<String, PromptError>>) -> Vec<String> {
        results
            .into_iter()
            .map(|r| r.expect("fragment should decode"))
            .collect()
    }

    #[test]
    fn test_decodes_content_deltas_in_order() {
        let mut decoder = SseDecoder::default();
        let body = concat!(
            "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"1. What\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\" is X?\"}}]}\n\n",
            "data: [DONE]\n\n",
        );
        let fragments = contents(decoder.feed(body.as_bytes()));
        assert_eq!(fragments, vec!["1. What", " is X?"]);
    }

    #[test]
    fn test_reassembles_lines_split_across_chunks() {
        let mut decoder = SseDecoder::default();
        let first = decoder.feed(b"data: {\"choices\":[{\"delta\":{\"cont");
        assert!(first.is_empty());
        let second = contents(decoder.feed(b"ent\":\"Hello\"}}]}\r\n\r\n"));
        assert_eq!(second, vec!["Hello"]);
    }

    #[test]
    fn test_ignores_everything_after_done() {
        let mut decoder = SseDecoder::default();
        let fragments = decoder.feed(
            b"data: [DONE]\n\ndata: {\"choices\":[{\"delta\":{\"content\":\"late\"}}]}\n",
        );
        assert!(fragments.is_empty());
        assert!(decoder.finish().is_none());
    }

    #[test]
    fn test_skips_comments_and_other_fields() {
        let mut decoder = SseDecoder::default();
        let fragments = decoder.feed(b": keep-alive\nevent: message\nid: 7\n\n");
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_finish_flushes_unterminated_line() {
        let mut decoder = SseDecoder::default();
        assert!(decoder
            .feed(b"data: {\"choices\":[{\"delta\":{\"content\":\"tail\"}}]}")
            .is_empty());
        let last = decoder.finish().expect("pending line").expect("valid json");
        assert_eq!(last, "tail");
    }

    #[test]
    fn test_invalid_payload_is_a_stream_error() {
        let mut decoder = SseDecoder::default();
        let mut results = decoder.feed(b"data: {not json}\n");
        assert_eq!(results.len(), 1);
        match results.remove(0) {
            Err(PromptError::AiStream(msg)) => assert!(msg.contains("invalid stream payload")),
            other => panic!("Expected AiStream error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_object_surfaces_as_api_error() {
        let mut decoder = SseDecoder::default();
        let mut results =
            decoder.feed(b"data: {\"error\":{\"message\":\"maximum context length exceeded\"}}\n");
        match results.remove(0) {
            Err(e @ PromptError::AiApi(_)) => assert!(e.is_context_length()),
            other => panic!("Expected AiApi error, got {other:?}"),
        }
    }
}
