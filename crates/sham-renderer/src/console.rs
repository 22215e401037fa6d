//! Terminal rendering of the chat transcript.
//!
//! Output is incremental: a streaming reply is written as a growing line,
//! printing only the new suffix for each update. While the overlay is
//! hidden nothing is written; [`ConsoleTranscript::replay`] redraws the
//! whole transcript when it is shown again. Scrolling redraws the turns
//! above the scroll position, and new content while scrolled redraws from
//! the bottom.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sham_common::{Author, RenderError, TranscriptRenderer, Turn};

use crate::transcript::Transcript;

const USER_LABEL: &str = "\x1b[36mأنت:\x1b[0m ";
const ASSISTANT_LABEL: &str = "\x1b[33mمساعد شام:\x1b[0m ";
const TYPING_INDICATOR: &str = "\x1b[90m...\x1b[0m";
const CLEAR_LINE: &str = "\r\x1b[K";

/// A [`Transcript`] mirrored onto a terminal writer.
pub struct ConsoleTranscript<W> {
    transcript: Transcript,
    out: W,
    visible: Arc<AtomicBool>,
    /// Live text currently on screen, if the live line has been drawn.
    printed: Option<String>,
    indicator_shown: bool,
}

impl<W: Write + Send> ConsoleTranscript<W> {
    /// `visible` is shared with whoever opens and closes the overlay.
    pub fn new(out: W, visible: Arc<AtomicBool>) -> Self {
        Self {
            transcript: Transcript::new(),
            out,
            visible,
            printed: None,
            indicator_shown: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Redraw every turn above the scroll position, including the live one
    /// as it stands now when pinned to the bottom.
    pub fn replay(&mut self) {
        let result = self.write_replay();
        self.report(result);
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.transcript.scroll_up(n);
        self.redraw_if_visible();
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.transcript.scroll_down(n);
        self.redraw_if_visible();
    }

    /// Forget every turn. Refused while a reply is streaming.
    pub fn clear(&mut self) -> bool {
        if !self.transcript.clear() {
            return false;
        }
        self.printed = None;
        self.indicator_shown = false;
        true
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }

    fn is_scrolled(&self) -> bool {
        self.transcript.scroll_offset() > 0
    }

    fn redraw_if_visible(&mut self) {
        if self.is_visible() {
            self.replay();
        }
    }

    fn write_replay(&mut self) -> io::Result<()> {
        self.printed = None;
        self.indicator_shown = false;

        for turn in self.transcript.visible_turns() {
            if turn.is_streaming() {
                continue;
            }
            writeln!(self.out, "{}{}", label(turn.author()), turn.text())?;
        }

        if self.is_scrolled() {
            return self.out.flush();
        }
        if let Some(live) = self.transcript.live_turn() {
            write!(self.out, "{ASSISTANT_LABEL}{}", live.text())?;
            if self.transcript.shows_typing_indicator() {
                write!(self.out, "{TYPING_INDICATOR}")?;
                self.indicator_shown = true;
            }
            self.printed = Some(live.text().to_string());
        }

        self.out.flush()
    }

    fn write_append(&mut self, turn: &Turn) -> io::Result<()> {
        if turn.is_streaming() {
            write!(self.out, "{ASSISTANT_LABEL}{TYPING_INDICATOR}")?;
            self.printed = Some(turn.text().to_string());
            self.indicator_shown = true;
        } else {
            writeln!(self.out, "{}{}", label(turn.author()), turn.text())?;
        }
        self.out.flush()
    }

    fn write_update(&mut self, text: &str) -> io::Result<()> {
        let Some(prev) = self.printed.as_deref() else {
            return Ok(());
        };

        if self.indicator_shown {
            if text.is_empty() {
                return Ok(());
            }
            write!(self.out, "{CLEAR_LINE}{ASSISTANT_LABEL}{text}")?;
            self.indicator_shown = false;
        } else if let Some(suffix) = text.strip_prefix(prev) {
            write!(self.out, "{suffix}")?;
        } else {
            // Replaced rather than extended (the error message)
            write!(self.out, "\n{ASSISTANT_LABEL}{text}")?;
        }

        self.printed = Some(text.to_string());
        self.out.flush()
    }

    fn write_finalize(&mut self) -> io::Result<()> {
        if self.printed.take().is_none() {
            return Ok(());
        }
        if self.indicator_shown {
            write!(self.out, "{CLEAR_LINE}{ASSISTANT_LABEL}")?;
            self.indicator_shown = false;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn report(&self, result: io::Result<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write chat transcript");
        }
    }
}

impl<W: Write + Send> TranscriptRenderer for ConsoleTranscript<W> {
    fn append(&mut self, turn: Turn) {
        if !self.is_visible() {
            self.transcript.append(turn);
            return;
        }
        let result = if self.is_scrolled() {
            self.transcript.append(turn);
            self.write_replay()
        } else {
            let result = self.write_append(&turn);
            self.transcript.append(turn);
            result
        };
        self.report(result);
    }

    fn update_live(&mut self, text: &str) -> Result<(), RenderError> {
        let scrolled = self.is_scrolled();
        self.transcript.update_live(text)?;
        if self.is_visible() {
            let result = if scrolled {
                self.write_replay()
            } else {
                self.write_update(text)
            };
            self.report(result);
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        let scrolled = self.is_scrolled();
        self.transcript.finalize()?;
        let result = if self.is_visible() && scrolled {
            self.write_replay()
        } else if self.is_visible() {
            self.write_finalize()
        } else {
            self.printed = None;
            self.indicator_shown = false;
            Ok(())
        };
        self.report(result);
        Ok(())
    }
}

fn label(author: Author) -> &'static str {
    match author {
        Author::User => USER_LABEL,
        Author::Assistant => ASSISTANT_LABEL,
    }
}
