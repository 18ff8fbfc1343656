//! Assistant conversation state.
//!
//! User messages are appended immediately. Replies are produced one at a
//! time after a simulated typing delay, strictly in submission order:
//! overlapping submissions queue behind the one being answered.
//! The caller owns the timer; this type only says when to start one.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use hibells_types::message::{ChatMessage, GREETING};

use crate::responder::{self, Topic};

/// What the caller should do after a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing appended
    Ignored,
    /// Start the reply timer
    StartTimer,
    /// A reply is already pending; this one waits its turn
    Queued,
}

/// Result of producing one reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyOutcome {
    pub topic: Option<Topic>,
    /// More submissions are waiting; start another timer
    pub start_next: bool,
}

pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: VecDeque<String>,
    last_topic: Option<Topic>,
}

impl ChatSession {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING, now)],
            pending: VecDeque::new(),
            last_topic: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The typing indicator is shown while anything is unanswered
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Topic of the most recent reply, `None` for the fallback
    pub fn last_topic(&self) -> Option<Topic> {
        self.last_topic
    }

    pub fn submit(&mut self, text: &str, now: DateTime<Utc>) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        self.messages.push(ChatMessage::user(text, now));
        self.pending.push_back(text.to_string());
        if self.pending.len() == 1 {
            SubmitOutcome::StartTimer
        } else {
            SubmitOutcome::Queued
        }
    }

    /// Answer the oldest unanswered submission. `None` if nothing is pending.
    pub fn complete_reply(&mut self, now: DateTime<Utc>) -> Option<ReplyOutcome> {
        let prompt = self.pending.pop_front()?;
        let topic = responder::classify(&prompt);
        self.messages
            .push(ChatMessage::assistant(responder::respond(&prompt), now));
        self.last_topic = topic;
        Some(ReplyOutcome {
            topic,
            start_next: !self.pending.is_empty(),
        })
    }
}

/// Canned prompts offered above the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Schedule,
    Courses,
    Map,
    Records,
}

impl QuickAction {
    pub fn all() -> &'static [QuickAction] {
        &[
            QuickAction::Schedule,
            QuickAction::Courses,
            QuickAction::Map,
            QuickAction::Records,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Schedule => "My Schedule",
            QuickAction::Courses => "Course Info",
            QuickAction::Map => "Campus Map",
            QuickAction::Records => "Academic Records",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::Schedule => "Show me my schedule",
            QuickAction::Courses => "Tell me about my courses",
            QuickAction::Map => "Help me find a location on campus",
            QuickAction::Records => "Show my academic results",
        }
    }
}
