//! The terminal event loop.

use tokio::io::{AsyncBufReadExt, BufReader};

use super::core::ShamApp;
use super::types::UiEvent;

impl ShamApp {
    /// Read UI events from stdin until `/quit` or end of input.
    ///
    /// Chat turns run as tasks on the same runtime and make progress
    /// whenever this loop waits for input.
    pub async fn run(mut self) -> sham_common::Result<()> {
        self.show_screen();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            if let Some(event) = UiEvent::parse(&line, self.chat_open()) {
                self.dispatch(event);
            }
            if self.should_exit() {
                break;
            }
        }

        self.close_modal();
        Ok(())
    }
}
