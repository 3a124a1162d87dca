// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::io;
use std::path::Path;

use super::parser::board::parse_outline;
use super::parser::component::ComponentParser;
use super::parser::header::parse_units;
use super::parser::shape::ShapeParser;
use super::parser::signal::SignalParser;
use super::parser::SectionParser;
use super::section::{extract_section, BOARD, COMPONENTS, HEADER, SHAPES, SIGNALS};
use super::{Design, Signal};
use crate::error::{GencadError, Result};
use crate::report::Reporter;

/// Build the shape, component and signal tables from a whole document.
pub fn parse_gencad(content: &str, report: &dyn Reporter) -> Design {
    let mut design = Design::new();

    if let Some(units) = parse_units(extract_section(content, HEADER, report)) {
        design.units = units;
    }
    report.info(&format!("Using units: {}", design.units));

    design.outline = parse_outline(extract_section(content, BOARD, report));
    report.info(&format!(
        "Parsed board outline with {} segments",
        design.outline.len()
    ));

    let shapes =
        SectionParser::new(ShapeParser).parse(extract_section(content, SHAPES, report), report);
    for shape in shapes {
        design.shapes.insert(shape);
    }
    report.info(&format!("Parsed {} shapes", design.shapes.len()));

    let components = SectionParser::new(ComponentParser)
        .parse(extract_section(content, COMPONENTS, report), report);
    for component in components {
        design.components.insert(component);
    }
    report.info(&format!("Parsed {} components", design.components.len()));

    let signals = SectionParser::new(SignalParser)
        .parse(extract_section(content, SIGNALS, report), report);
    // A net exists only once it has a node.
    for signal in signals.into_iter().filter(|s| !s.endpoints.is_empty()) {
        design
            .signals
            .insert_with(signal, |existing: &mut Signal, more| {
                existing.endpoints.extend(more.endpoints)
            });
    }
    report.info(&format!("Parsed {} signals", design.signals.len()));

    design
}

pub struct GencadReader;

impl GencadReader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a GENCAD file. The file is fully read and closed
    /// before parsing starts.
    pub fn read<P: AsRef<Path>>(&self, path: P, report: &dyn Reporter) -> Result<Design> {
        let path = path.as_ref();
        report.info(&format!("Loading GENCAD file: {}", path.display()));

        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => GencadError::NotFound(path.to_path_buf()),
            _ => GencadError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        report.debug(&format!("GENCAD file size: {} bytes", content.len()));

        Ok(parse_gencad(&content, report))
    }
}

impl Default for GencadReader {
    fn default() -> Self {
        Self::new()
    }
}
