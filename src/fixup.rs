// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Diode coordinate correction for an already exported pin table.

use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{GencadError, Result};
use crate::report::Reporter;
use crate::resolve::is_diode;

struct Columns {
    component: usize,
    pin_name: usize,
    x: usize,
    y: usize,
}

impl Columns {
    fn locate(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| GencadError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };
        Ok(Self {
            component: find("component")?,
            pin_name: find("pin_name")?,
            x: find("x")?,
            y: find("y")?,
        })
    }
}

fn with_fields(record: &StringRecord, x: usize, y: usize, values: (&str, &str)) -> StringRecord {
    record
        .iter()
        .enumerate()
        .map(|(i, field)| match i {
            _ if i == x => values.0,
            _ if i == y => values.1,
            _ => field,
        })
        .collect()
}

/// Swap x/y between the two rows of every two-pin diode. Rows keep their
/// order. Returns how many diodes were swapped.
pub fn swap_diode_rows(
    rows: &mut [StringRecord],
    headers: &StringRecord,
    path: &Path,
    report: &dyn Reporter,
) -> Result<usize> {
    let cols = Columns::locate(headers, path)?;

    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for (i, row) in rows.iter().enumerate() {
        let component = row.get(cols.component).unwrap_or_default();
        let slot = *slots.entry(component.to_string()).or_insert_with(|| {
            groups.push((component.to_string(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(i);
    }

    let mut swapped = 0;
    for (component, mut members) in groups {
        if !is_diode(&component) || members.len() != 2 {
            continue;
        }
        members.sort_by(|&a, &b| {
            let name = |i: usize| rows[i].get(cols.pin_name).unwrap_or_default();
            name(a).cmp(name(b))
        });
        let (first, second) = (members[0], members[1]);

        let first_xy = (
            rows[first].get(cols.x).unwrap_or_default().to_string(),
            rows[first].get(cols.y).unwrap_or_default().to_string(),
        );
        let second_xy = (
            rows[second].get(cols.x).unwrap_or_default().to_string(),
            rows[second].get(cols.y).unwrap_or_default().to_string(),
        );
        rows[first] = with_fields(&rows[first], cols.x, cols.y, (&second_xy.0, &second_xy.1));
        rows[second] = with_fields(&rows[second], cols.x, cols.y, (&first_xy.0, &first_xy.1));

        report.info(&format!(
            "Swapped coordinates for diode {component}: Pin {} now at ({}, {}), Pin {} now at ({}, {})",
            rows[first].get(cols.pin_name).unwrap_or_default(),
            second_xy.0,
            second_xy.1,
            rows[second].get(cols.pin_name).unwrap_or_default(),
            first_xy.0,
            first_xy.1
        ));
        swapped += 1;
    }

    Ok(swapped)
}

fn read_table(path: &Path) -> csv::Result<(StringRecord, Vec<StringRecord>)> {
    let mut reader = ReaderBuilder::new().from_path(path)?;
    let headers = reader.headers()?.clone();
    let rows = reader.records().collect::<csv::Result<Vec<_>>>()?;
    Ok((headers, rows))
}

fn write_rows(path: &Path, headers: &StringRecord, rows: &[StringRecord]) -> csv::Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a pin table, swap diode coordinates, and write the result.
pub fn swap_diode_pins_in_csv(input: &Path, output: &Path, report: &dyn Reporter) -> Result<usize> {
    if !input.is_file() {
        return Err(GencadError::NotFound(input.to_path_buf()));
    }

    let (headers, mut rows) = read_table(input).map_err(|source| GencadError::Read {
        path: input.to_path_buf(),
        source: source.into(),
    })?;

    let swapped = swap_diode_rows(&mut rows, &headers, input, report)?;

    write_rows(output, &headers, &rows).map_err(|source| GencadError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    report.info(&format!("Swapped coordinates for {swapped} diode components"));
    report.info(&format!("Wrote updated CSV to {}", output.display()));
    Ok(swapped)
}
