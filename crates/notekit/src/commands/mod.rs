//! # Command Layer
//!
//! This module contains the **core logic** of notekit. Each operation lives in its
//! own submodule as plain Rust functions over the capability traits in [`crate::store`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Resolve references and render them ([`links`], [`web_links`])
//! - Compute identifiers and time values ([`unique_id`], [`time`])
//! - Look up configuration records ([`note_types`])
//! - Drive the one storage mutation notekit performs ([`move_file`])
//!
//! ## Failure Policy
//!
//! Formatting never interrupts the document pipeline that calls it. Pure
//! commands do not return `Result`: a dangling reference, a malformed URL or a
//! missing configuration document degrade to a documented fallback value and a
//! `tracing` event. Only [`move_file`] and [`context`] touch storage and can
//! return an error.
//!
//! ## Structured Returns
//!
//! [`move_file`] returns a [`CmdResult`] carrying the target path plus
//! structured messages with levels. The host decides how to surface them
//! (notices, logs, status bars).
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryVault` and `FixedClock`, never the filesystem.

pub mod context;
pub mod links;
pub mod move_file;
pub mod note_types;
pub mod time;
pub mod unique_id;
pub mod web_links;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub target_path: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_target_path(mut self, path: impl Into<String>) -> Self {
        self.target_path = Some(path.into());
        self
    }
}

/// Wraps rendered output in double quotes when requested.
pub(crate) fn quoted(text: String, quote: bool) -> String {
    if quote {
        format!("\"{}\"", text)
    } else {
        text
    }
}
