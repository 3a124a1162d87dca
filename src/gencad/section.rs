// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! `$TAG ... $ENDTAG` block extraction.

use nom::{
    bytes::complete::{tag, take_until},
    sequence::preceded,
    IResult, Parser,
};

use crate::report::Reporter;

pub const HEADER: &str = "HEADER";
pub const BOARD: &str = "BOARD";
pub const SHAPES: &str = "SHAPES";
pub const COMPONENTS: &str = "COMPONENTS";
pub const SIGNALS: &str = "SIGNALS";

fn section_body<'a>(input: &'a str, open: &str, close: &str) -> IResult<&'a str, &'a str> {
    preceded((take_until(open), tag(open)), take_until(close)).parse(input)
}

/// Text between the first `$<name>` and the first `$END<name>` after it,
/// trimmed. A missing block yields an empty string.
pub fn extract_section<'a>(content: &'a str, name: &str, report: &dyn Reporter) -> &'a str {
    let open = format!("${name}");
    let close = format!("$END{name}");

    match section_body(content, &open, &close) {
        Ok((_, body)) => body.trim(),
        Err(_) => {
            report.warn(&format!("Section {name} not found in file"));
            ""
        }
    }
}
