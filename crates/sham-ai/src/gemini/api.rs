//! `ChatBackend` implementation for `GeminiChat`.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use tokio_util::io::StreamReader;
use tracing::debug;

use crate::streaming::{sse_events, SseEvent};
use crate::{AiError, ChatBackend, ChunkStream, Message, Role};

use super::client::{parse_stream_chunk, GeminiChat};

/// State threaded through the reply stream.
struct ReplyState {
    events: BoxStream<'static, Result<SseEvent, AiError>>,
    history: Arc<Mutex<Vec<Message>>>,
    prompt: String,
    reply: String,
    done: bool,
}

impl ReplyState {
    /// Record the finished exchange so the next turn sees it.
    fn commit(&mut self) {
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        history.push(Message {
            role: Role::User,
            content: std::mem::take(&mut self.prompt),
        });
        history.push(Message {
            role: Role::Model,
            content: std::mem::take(&mut self.reply),
        });
    }
}

#[async_trait]
impl ChatBackend for GeminiChat {
    async fn send_message_stream(&self, message: &str) -> Result<ChunkStream, AiError> {
        let body = self.build_request_body(message);
        let url = self.stream_url();

        debug!(model = %self.config.model, "Gemini API streaming request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let byte_stream = response
            .bytes_stream()
            .map(|result| result.map_err(std::io::Error::other))
            .boxed();
        let events = sse_events(StreamReader::new(byte_stream)).boxed();

        Ok(reply_stream(ReplyState {
            events,
            history: Arc::clone(&self.history),
            prompt: message.to_string(),
            reply: String::new(),
            done: false,
        }))
    }
}

/// Map SSE events to text increments, committing history on clean end.
fn reply_stream(state: ReplyState) -> ChunkStream {
    futures_util::stream::unfold(state, |mut state| async move {
        if state.done {
            return None;
        }

        loop {
            match state.events.next().await {
                Some(Ok(event)) => match parse_stream_chunk(&event.data) {
                    Ok(Some(text)) => {
                        state.reply.push_str(&text);
                        return Some((Ok(text), state));
                    }
                    Ok(None) => continue,
                    Err(e) => {
                        state.done = true;
                        return Some((Err(e), state));
                    }
                },
                Some(Err(e)) => {
                    state.done = true;
                    return Some((Err(e), state));
                }
                None => {
                    state.done = true;
                    state.commit();
                    return None;
                }
            }
        }
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_from(body: &'static str) -> (ReplyState, Arc<Mutex<Vec<Message>>>) {
        let history = Arc::new(Mutex::new(Vec::new()));
        let state = ReplyState {
            events: sse_events(body.as_bytes()).boxed(),
            history: Arc::clone(&history),
            prompt: "ما هي شام باي؟".into(),
            reply: String::new(),
            done: false,
        };
        (state, history)
    }

    #[tokio::test]
    async fn yields_increments_and_commits_history() {
        let (state, history) = state_from(concat!(
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"شام\"}]}}]}\n\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\" باي\"}]}}]}\n\n",
            "data: {\"usageMetadata\":{\"promptTokenCount\":4}}\n\n",
        ));

        let chunks: Vec<String> = reply_stream(state)
            .map(|c| c.unwrap())
            .collect()
            .await;
        assert_eq!(chunks, vec!["شام", " باي"]);

        let history = history.lock().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].content, "ما هي شام باي؟");
        assert_eq!(history[1].role, Role::Model);
        assert_eq!(history[1].content, "شام باي");
    }

    #[tokio::test]
    async fn error_chunk_ends_stream_without_history() {
        let (state, history) = state_from(concat!(
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"شام\"}]}}]}\n\n",
            "data: {\"error\":{\"message\":\"overloaded\"}}\n\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"never\"}]}}]}\n\n",
        ));

        let items: Vec<Result<String, AiError>> = reply_stream(state).collect().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), "شام");
        assert!(matches!(items[1], Err(AiError::ApiError(_))));
        assert!(history.lock().unwrap().is_empty());
    }
}
