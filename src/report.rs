// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Diagnostics sink handed to the parsing, resolution and export stages.

use std::cell::RefCell;

use log::Level;

/// Receives progress and recoverable-problem messages from the pipeline.
pub trait Reporter {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards every message to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn debug(&self, message: &str) {
        log::debug!(target: "gencad", "{message}");
    }

    fn info(&self, message: &str) {
        log::info!(target: "gencad", "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: "gencad", "{message}");
    }
}

/// Keeps messages in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    /// Messages recorded at exactly `level`.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warn)
    }

    fn push(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }
}
