//! Server-Sent Events (SSE) streaming parser.
//!
//! Gemini's `streamGenerateContent?alt=sse` endpoint answers with an SSE
//! body. This module turns any buffered async reader into a stream of
//! parsed events, so callers can await one event at a time.

use futures_util::Stream;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::AiError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type, when the server sent an `event:` field.
    pub event: Option<String>,
    /// The event data; multiple `data:` lines are joined with `\n`.
    pub data: String,
}

struct SseState<R> {
    lines: Lines<R>,
    current_event: Option<String>,
    current_data: String,
    done: bool,
}

impl<R> SseState<R> {
    fn take_event(&mut self) -> SseEvent {
        SseEvent {
            event: self.current_event.take(),
            data: std::mem::take(&mut self.current_data),
        }
    }
}

/// Parse an SSE body into events.
///
/// A read error ends the stream after yielding `AiError::NetworkError`.
pub fn sse_events<R>(reader: R) -> impl Stream<Item = Result<SseEvent, AiError>>
where
    R: AsyncBufRead + Unpin,
{
    let state = SseState {
        lines: reader.lines(),
        current_event: None,
        current_data: String::new(),
        done: false,
    };

    futures_util::stream::unfold(state, |mut state| async move {
        if state.done {
            return None;
        }

        loop {
            let line = match state.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    state.done = true;
                    // Flush an event that was not followed by a blank line
                    if state.current_data.is_empty() {
                        return None;
                    }
                    let event = state.take_event();
                    return Some((Ok(event), state));
                }
                Err(e) => {
                    state.done = true;
                    return Some((Err(AiError::NetworkError(e.to_string())), state));
                }
            };

            if line.is_empty() {
                if state.current_data.is_empty() {
                    state.current_event = None;
                    continue;
                }
                let event = state.take_event();
                return Some((Ok(event), state));
            }

            if let Some(event_type) = line.strip_prefix("event:") {
                state.current_event = Some(event_type.trim_start().to_string());
            } else if let Some(data) = line.strip_prefix("data:") {
                let data = data.strip_prefix(' ').unwrap_or(data);
                if !state.current_data.is_empty() {
                    state.current_data.push('\n');
                }
                state.current_data.push_str(data);
            }
            // id:, retry: and comment lines are ignored
        }
    })
}
