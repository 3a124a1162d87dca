// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Block parsing framework for GENCAD sections
//!
//! A section is a run of blocks. Each block starts with a header line
//! (`SHAPE "..."`, `COMPONENT "..."`, `SIGNAL "..."`) and owns every
//! following line up to the next header. Lines are fed into a mutable
//! context which is turned into an immutable record when the block ends.

pub mod board;
pub mod common;
pub mod component;
pub mod header;
pub mod shape;
pub mod signal;

use crate::report::Reporter;

/// Outcome of feeding one body line to the current block
#[derive(Debug, PartialEq)]
pub enum ContinuationResult {
    /// The line set something on the block
    Applied,
    /// The line is not a directive this block understands
    Ignored,
}

/// Generic trait for parsing one kind of block in a GENCAD section
pub trait BlockParser {
    /// The record this parser produces
    type Item;
    /// Accumulator used while the block is open
    type Context;

    /// Parse a header line, opening a new block
    fn parse_header(&self, line: &str) -> Option<Self::Context>;

    /// Process a body line for the open block
    fn parse_continuation(
        &self,
        context: &mut Self::Context,
        line: &str,
        report: &dyn Reporter,
    ) -> ContinuationResult;

    /// Build the record from the accumulated context
    fn finalize(&self, context: Self::Context) -> Self::Item;

    /// Name of this block type for diagnostics
    fn item_name() -> &'static str;
}

/// Line-oriented driver for a [`BlockParser`]
pub struct SectionParser<P: BlockParser> {
    parser: P,
}

impl<P: BlockParser> SectionParser<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Parse every block in `section`, in source order.
    ///
    /// Body lines seen before the first header have no block to attach to
    /// and are dropped.
    pub fn parse(&self, section: &str, report: &dyn Reporter) -> Vec<P::Item> {
        let mut items = Vec::new();
        let mut current: Option<P::Context> = None;

        for line in section.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(context) = self.parser.parse_header(line) {
                if let Some(done) = current.replace(context) {
                    items.push(self.parser.finalize(done));
                }
                continue;
            }

            match current.as_mut() {
                Some(context) => {
                    self.parser.parse_continuation(context, line, report);
                }
                None => report.debug(&format!(
                    "Dropping line outside any {}: {line}",
                    P::item_name()
                )),
            }
        }

        if let Some(done) = current {
            items.push(self.parser.finalize(done));
        }

        items
    }
}
