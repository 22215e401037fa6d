//! Transcript state for the AI chat overlay.

use sham_common::{RenderError, TranscriptRenderer, Turn};

/// Ordered chat turns with at most one live (streaming) entry.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
    live: Option<usize>,
    typing_indicator: bool,
    scroll_offset: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every turn. Refused while a reply is streaming.
    pub fn clear(&mut self) -> bool {
        if self.is_streaming() {
            tracing::debug!("transcript clear refused mid-stream");
            return false;
        }
        self.turns.clear();
        self.typing_indicator = false;
        self.scroll_offset = 0;
        true
    }

    /// Hide `n` more of the newest turns, stopping at the first turn.
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(n).min(self.turns.len());
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    // -- Getters --

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn live_turn(&self) -> Option<&Turn> {
        self.live.map(|i| &self.turns[i])
    }

    pub fn is_streaming(&self) -> bool {
        self.live.is_some()
    }

    /// Whether the live turn still shows its "typing" marker.
    pub fn shows_typing_indicator(&self) -> bool {
        self.typing_indicator
    }

    /// Turns hidden below the view; 0 means pinned to bottom.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Turns above the scroll position, oldest first.
    pub fn visible_turns(&self) -> &[Turn] {
        &self.turns[..self.turns.len() - self.scroll_offset]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn live_mut(&mut self) -> Result<&mut Turn, RenderError> {
        let index = self.live.ok_or(RenderError::NoActiveStream)?;
        Ok(&mut self.turns[index])
    }
}

impl TranscriptRenderer for Transcript {
    fn append(&mut self, turn: Turn) {
        if turn.is_streaming() {
            if self.live.is_some() {
                tracing::error!("streaming turn appended while another is live");
                debug_assert!(false, "streaming turn appended while another is live");
            }
            self.live = Some(self.turns.len());
            self.typing_indicator = true;
        }
        self.turns.push(turn);
        self.scroll_offset = 0;
    }

    fn update_live(&mut self, text: &str) -> Result<(), RenderError> {
        self.live_mut()?.set_live_text(text)?;
        if !text.is_empty() {
            self.typing_indicator = false;
        }
        self.scroll_offset = 0;
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        self.live_mut()?.finish()?;
        self.live = None;
        self.typing_indicator = false;
        self.scroll_offset = 0;
        Ok(())
    }
}
