//! The assistant panel. Replies come from a [`ChatBackend`]; the session
//! only keeps the transcript and at most one request in flight.

mod canned;

use std::sync::mpsc::{Receiver, TryRecvError};

pub use canned::CannedResponder;

/// One reply or one failure notification per message, delivered eventually.
pub trait ChatBackend {
    fn send(&self, text: &str) -> Receiver<Result<String, String>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub failed: bool,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            failed: false,
        }
    }

    fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            failed: false,
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            failed: true,
        }
    }
}

pub struct ChatSession {
    backend: Box<dyn ChatBackend>,
    messages: Vec<ChatMessage>,
    pending: Option<Receiver<Result<String, String>>>,
}

impl ChatSession {
    pub fn new(backend: Box<dyn ChatBackend>, owner_name: &str) -> Self {
        Self {
            backend,
            messages: vec![ChatMessage::assistant(format!(
                "Hello! I'm {owner_name}'s AI assistant. Ask me anything about skills, projects, or experience."
            ))],
            pending: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Queues `text` for the backend. Blank input and input sent while a
    /// reply is outstanding are ignored.
    pub fn submit(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.pending.is_some() {
            return false;
        }

        self.messages.push(ChatMessage::user(text));
        self.pending = Some(self.backend.send(text));
        true
    }

    /// Collects a finished reply, if any. Returns whether the transcript changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.take() else {
            return false;
        };

        match rx.try_recv() {
            Ok(Ok(reply)) => {
                self.messages.push(ChatMessage::assistant(reply));
                true
            }
            Ok(Err(error)) => {
                log::warn!("chat backend failed: {error}");
                self.messages.push(ChatMessage::failure(format!(
                    "Sorry, I couldn't answer that: {error}"
                )));
                true
            }
            Err(TryRecvError::Empty) => {
                self.pending = Some(rx);
                false
            }
            Err(TryRecvError::Disconnected) => {
                log::warn!("chat backend worker disconnected without replying");
                self.messages.push(ChatMessage::failure(
                    "I'm not connected right now. Please try again.",
                ));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Sender};
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Hands every request's sender to the test so it can answer on demand.
    #[derive(Clone, Default)]
    struct ManualBackend {
        senders: Arc<Mutex<Vec<(String, Sender<Result<String, String>>)>>>,
    }

    impl ChatBackend for ManualBackend {
        fn send(&self, text: &str) -> Receiver<Result<String, String>> {
            let (tx, rx) = mpsc::channel();
            self.senders.lock().unwrap().push((text.to_owned(), tx));
            rx
        }
    }

    impl ManualBackend {
        fn take_last(&self) -> (String, Sender<Result<String, String>>) {
            self.senders.lock().unwrap().pop().unwrap()
        }
    }

    fn session() -> (ChatSession, ManualBackend) {
        let backend = ManualBackend::default();
        let session = ChatSession::new(Box::new(backend.clone()), "Ada");
        (session, backend)
    }

    #[test]
    fn starts_with_a_greeting() {
        let (session, _) = session();
        assert_eq!(session.messages().len(), 1);
        assert!(session.messages()[0].text.contains("Ada's AI assistant"));
    }

    #[test]
    fn reply_is_appended_after_polling() {
        let (mut session, backend) = session();

        assert!(session.submit("  what do you build?  "));
        assert!(session.is_waiting());
        assert!(!session.poll());

        let (text, tx) = backend.take_last();
        assert_eq!(text, "what do you build?");
        tx.send(Ok("Dashboards.".to_owned())).unwrap();

        assert!(session.poll());
        assert!(!session.is_waiting());
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.text, "Dashboards.");
    }

    #[test]
    fn blank_and_overlapping_messages_are_ignored() {
        let (mut session, _backend) = session();

        assert!(!session.submit("   "));
        assert!(session.submit("first"));
        assert!(!session.submit("second"));
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn failures_and_dead_workers_become_error_messages() {
        let (mut session, backend) = session();

        session.submit("one");
        let (_, tx) = backend.take_last();
        tx.send(Err("backend offline".to_owned())).unwrap();
        assert!(session.poll());
        let last = session.messages().last().unwrap();
        assert!(last.failed && last.text.contains("backend offline"));

        session.submit("two");
        drop(backend.take_last());
        assert!(session.poll());
        assert!(session.messages().last().unwrap().failed);
        assert!(!session.is_waiting());
    }
}
