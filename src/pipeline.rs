// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::path::Path;

use crate::error::Result;
use crate::export::{export_all, OutputPaths};
use crate::gencad::reader::GencadReader;
use crate::gencad::Design;
use crate::report::Reporter;
use crate::resolve::{resolve_pins, ResolvedPin};

/// Parsed document together with its resolved pins.
#[derive(Debug, Clone)]
pub struct ResolvedBoard {
    pub design: Design,
    pub pins: Vec<ResolvedPin>,
}

/// Read, parse and resolve one GENCAD file.
pub fn load_board<P: AsRef<Path>>(input: P, report: &dyn Reporter) -> Result<ResolvedBoard> {
    let design = GencadReader::new().read(input, report)?;
    let pins = resolve_pins(&design, report);
    Ok(ResolvedBoard { design, pins })
}

/// Full run: read, resolve, and write all five tables.
pub fn convert<P: AsRef<Path>>(
    input: P,
    paths: &OutputPaths,
    report: &dyn Reporter,
) -> Result<ResolvedBoard> {
    let board = load_board(input, report)?;
    export_all(&board.design, &board.pins, paths, report)?;
    Ok(board)
}
