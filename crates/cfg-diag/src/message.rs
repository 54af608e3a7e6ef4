// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic messages that are either ready-made or formatted on demand.

use std::borrow::Cow;
use std::fmt;

/// A diagnostic message: a literal string, or a thunk that produces one.
///
/// The lazy form lets callers skip expensive formatting entirely when
/// verbose output is off; the thunk runs at most once.
pub enum DiagnosticMessage<'a> {
    Literal(Cow<'a, str>),
    Lazy(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> DiagnosticMessage<'a> {
    /// Wrap a thunk that formats the message when it is needed.
    pub fn lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> String + 'a,
    {
        DiagnosticMessage::Lazy(Box::new(f))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, DiagnosticMessage::Lazy(_))
    }

    /// Produce the message text, invoking the thunk if there is one.
    pub fn resolve(self) -> Cow<'a, str> {
        match self {
            DiagnosticMessage::Literal(text) => text,
            DiagnosticMessage::Lazy(f) => Cow::Owned(f()),
        }
    }
}

impl<'a> From<&'a str> for DiagnosticMessage<'a> {
    fn from(text: &'a str) -> Self {
        DiagnosticMessage::Literal(Cow::Borrowed(text))
    }
}

impl From<String> for DiagnosticMessage<'_> {
    fn from(text: String) -> Self {
        DiagnosticMessage::Literal(Cow::Owned(text))
    }
}

impl fmt::Debug for DiagnosticMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticMessage::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            DiagnosticMessage::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
