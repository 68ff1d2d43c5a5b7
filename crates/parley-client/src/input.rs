//! Text input surface.
//!
//! Buffers free text and turns key presses into at most one `send_message`
//! intent. A plain line-submit (or the submit control) sends the trimmed
//! buffer; a line-submit with the secondary modifier inserts a newline
//! instead. Nothing is submitted while the controller is awaiting a reply.

/// A key press or control activation delivered to the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Text(String),
    Backspace,
    /// Line-submit keystroke; `modifier` is the secondary modifier (Shift).
    Enter { modifier: bool },
    /// The dedicated submit control.
    SubmitButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    AwaitingResponse,
}

/// What a key press produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// The buffer changed (or not); nothing to send.
    Edited,
    /// Send this trimmed text. The buffer has been cleared.
    Submit(String),
    /// Submission refused; the buffer is kept.
    Rejected(RejectReason),
}

#[derive(Debug, Default, Clone)]
pub struct InputSurface {
    buffer: String,
}

impl InputSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self, awaiting_response: bool) -> bool {
        !awaiting_response && !self.buffer.trim().is_empty()
    }

    pub fn handle_key(&mut self, key: KeyInput, awaiting_response: bool) -> InputOutcome {
        match key {
            KeyInput::Char(c) => {
                self.buffer.push(c);
                InputOutcome::Edited
            }
            KeyInput::Text(text) => {
                self.buffer.push_str(&text);
                InputOutcome::Edited
            }
            KeyInput::Backspace => {
                self.buffer.pop();
                InputOutcome::Edited
            }
            KeyInput::Enter { modifier: true } => {
                self.buffer.push('\n');
                InputOutcome::Edited
            }
            KeyInput::Enter { modifier: false } | KeyInput::SubmitButton => {
                self.submit(awaiting_response)
            }
        }
    }

    fn submit(&mut self, awaiting_response: bool) -> InputOutcome {
        if awaiting_response {
            return InputOutcome::Rejected(RejectReason::AwaitingResponse);
        }
        let text = self.buffer.trim();
        if text.is_empty() {
            return InputOutcome::Rejected(RejectReason::Empty);
        }
        let text = text.to_string();
        self.buffer.clear();
        InputOutcome::Submit(text)
    }
}
