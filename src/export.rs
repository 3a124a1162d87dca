// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use serde::Serialize;

use crate::error::{GencadError, Result};
use crate::gencad::Design;
use crate::report::Reporter;
use crate::resolve::{ResolvedPin, UNCONNECTED};

pub const PIN_COLUMNS: [&str; 6] = ["component", "pin_name", "x", "y", "layer", "signal"];
pub const CONNECTION_COLUMNS: [&str; 11] = [
    "signal",
    "component1",
    "pin1",
    "x1",
    "y1",
    "layer1",
    "component2",
    "pin2",
    "x2",
    "y2",
    "layer2",
];
pub const NETLIST_COLUMNS: [&str; 3] = ["signal", "pin_count", "components"];
pub const OUTLINE_COLUMNS: [&str; 4] = ["x1", "y1", "x2", "y2"];
pub const GRAPH_COLUMNS: [&str; 10] = [
    "id",
    "x",
    "y",
    "z",
    "component",
    "pin_name",
    "layer",
    "signal",
    "connected_to",
    "connected_ids",
];

#[derive(Debug, Serialize)]
pub struct PinCsvRecord<'a> {
    pub component: &'a str,
    pub pin_name: &'a str,
    pub x: f64,
    pub y: f64,
    pub layer: &'a str,
    pub signal: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ConnectionCsvRecord<'a> {
    pub signal: &'a str,
    pub component1: &'a str,
    pub pin1: &'a str,
    pub x1: f64,
    pub y1: f64,
    pub layer1: &'a str,
    pub component2: &'a str,
    pub pin2: &'a str,
    pub x2: f64,
    pub y2: f64,
    pub layer2: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NetlistCsvRecord<'a> {
    pub signal: &'a str,
    pub pin_count: usize,
    pub components: String,
}

#[derive(Debug, Serialize)]
pub struct OutlineCsvRecord {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Serialize)]
pub struct GraphCsvRecord<'a> {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub component: &'a str,
    pub pin_name: &'a str,
    pub layer: &'a str,
    pub signal: &'a str,
    pub connected_to: String,
    pub connected_ids: String,
}

/// Where the five tables for one input file go.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub pins: PathBuf,
    pub connections: PathBuf,
    pub netlist: PathBuf,
    pub board_outline: PathBuf,
    pub graph: PathBuf,
}

impl OutputPaths {
    /// `<dir>/<stem>_<table>.csv`, where `dir` defaults to the input's own
    /// directory.
    pub fn for_input(input: &Path, output_dir: Option<&Path>) -> Self {
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "board".to_string());
        let table = |name: &str| dir.join(format!("{stem}_{name}.csv"));

        Self {
            pins: table("pins"),
            connections: table("connections"),
            netlist: table("netlist"),
            board_outline: table("board_outline"),
            graph: table("graph"),
        }
    }

    pub fn all(&self) -> [&Path; 5] {
        [
            &self.pins,
            &self.connections,
            &self.netlist,
            &self.board_outline,
            &self.graph,
        ]
    }
}

fn pin_label(pin: &ResolvedPin) -> String {
    format!("{}:{}", pin.component, pin.pin_name)
}

/// Pins carrying a real net, grouped by net in order of first appearance.
fn group_by_signal(pins: &[ResolvedPin]) -> Vec<(&str, Vec<&ResolvedPin>)> {
    let mut groups: Vec<(&str, Vec<&ResolvedPin>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for pin in pins.iter().filter(|pin| pin.is_connected()) {
        let slot = *slots.entry(pin.signal.as_str()).or_insert_with(|| {
            groups.push((pin.signal.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(pin);
    }

    groups
}

/// (component, pin name) -> position in `pins`. On duplicates either the
/// first or the last pin is kept.
fn index_pins(pins: &[ResolvedPin], keep_last: bool) -> HashMap<(&str, &str), usize> {
    let mut index = HashMap::new();
    for (i, pin) in pins.iter().enumerate() {
        let key = (pin.component.as_str(), pin.pin_name.as_str());
        if keep_last {
            index.insert(key, i);
        } else {
            index.entry(key).or_insert(i);
        }
    }
    index
}

pub fn pin_records(pins: &[ResolvedPin]) -> Vec<PinCsvRecord<'_>> {
    pins.iter()
        .map(|pin| PinCsvRecord {
            component: &pin.component,
            pin_name: &pin.pin_name,
            x: pin.x,
            y: pin.y,
            layer: &pin.layer,
            signal: &pin.signal,
        })
        .collect()
}

/// One row per unordered pair of pins on the same net.
pub fn connection_records(pins: &[ResolvedPin]) -> Vec<ConnectionCsvRecord<'_>> {
    let mut records = Vec::new();
    for (signal, members) in group_by_signal(pins) {
        for (i, first) in members.iter().enumerate() {
            for second in &members[i + 1..] {
                records.push(ConnectionCsvRecord {
                    signal,
                    component1: &first.component,
                    pin1: &first.pin_name,
                    x1: first.x,
                    y1: first.y,
                    layer1: &first.layer,
                    component2: &second.component,
                    pin2: &second.pin_name,
                    x2: second.x,
                    y2: second.y,
                    layer2: &second.layer,
                });
            }
        }
    }
    records
}

/// One row per declared signal, listing the endpoints that resolved to a pin.
pub fn netlist_records<'a>(
    design: &'a Design,
    pins: &'a [ResolvedPin],
) -> Vec<NetlistCsvRecord<'a>> {
    let index = index_pins(pins, false);

    design
        .signals
        .iter()
        .map(|signal| {
            let found: Vec<&ResolvedPin> = signal
                .endpoints
                .iter()
                .filter_map(|ep| index.get(&(ep.component.as_str(), ep.pin.as_str())))
                .map(|&i| &pins[i])
                .collect();
            NetlistCsvRecord {
                signal: &signal.name,
                pin_count: found.len(),
                components: found
                    .iter()
                    .map(|pin| pin_label(pin))
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
        .collect()
}

pub fn outline_records(design: &Design) -> Vec<OutlineCsvRecord> {
    design
        .outline
        .iter()
        .map(|segment| OutlineCsvRecord {
            x1: segment.x1,
            y1: segment.y1,
            x2: segment.x2,
            y2: segment.y2,
        })
        .collect()
}

/// Every pin with its peers on the same net, by label and by id.
pub fn graph_records<'a>(design: &'a Design, pins: &'a [ResolvedPin]) -> Vec<GraphCsvRecord<'a>> {
    let index = index_pins(pins, true);
    let mut links: Vec<Option<(String, String)>> = vec![None; pins.len()];

    for signal in design.signals.iter().filter(|s| s.name != UNCONNECTED) {
        let members: Vec<usize> = signal
            .endpoints
            .iter()
            .filter_map(|ep| index.get(&(ep.component.as_str(), ep.pin.as_str())).copied())
            .collect();

        for (i, &member) in members.iter().enumerate() {
            let peers: Vec<&ResolvedPin> = members
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, &peer)| &pins[peer])
                .collect();
            let connected_to = peers
                .iter()
                .map(|pin| pin_label(pin))
                .collect::<Vec<_>>()
                .join("|");
            let connected_ids = peers
                .iter()
                .map(|pin| pin.id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            links[member] = Some((connected_to, format!("[{connected_ids}]")));
        }
    }

    pins.iter()
        .zip(links)
        .map(|(pin, link)| {
            let (connected_to, connected_ids) =
                link.unwrap_or_else(|| (String::new(), "[]".to_string()));
            GraphCsvRecord {
                id: pin.id,
                x: pin.x,
                y: pin.y,
                z: pin.z,
                component: &pin.component,
                pin_name: &pin.pin_name,
                layer: &pin.layer,
                signal: &pin.signal,
                connected_to,
                connected_ids,
            }
        })
        .collect()
}

fn write_csv<T: Serialize>(path: &Path, columns: &[&str], records: &[T]) -> csv::Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(columns)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a header row followed by one row per record.
pub fn write_table<T: Serialize>(path: &Path, columns: &[&str], records: &[T]) -> Result<()> {
    write_csv(path, columns, records).map_err(|source| GencadError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Export the raw pin list to CSV file
pub fn export_pins_to_csv(pins: &[ResolvedPin], path: &Path, report: &dyn Reporter) -> Result<()> {
    write_table(path, &PIN_COLUMNS, &pin_records(pins))?;
    report.info(&format!("Exported {} pins to {}", pins.len(), path.display()));
    Ok(())
}

/// Export pairwise connections to CSV file
pub fn export_connections_to_csv(
    pins: &[ResolvedPin],
    path: &Path,
    report: &dyn Reporter,
) -> Result<()> {
    let records = connection_records(pins);
    write_table(path, &CONNECTION_COLUMNS, &records)?;
    report.info(&format!(
        "Exported {} connections to {}",
        records.len(),
        path.display()
    ));
    Ok(())
}

/// Export the per-net summary to CSV file
pub fn export_netlist_to_csv(
    design: &Design,
    pins: &[ResolvedPin],
    path: &Path,
    report: &dyn Reporter,
) -> Result<()> {
    let records = netlist_records(design, pins);
    write_table(path, &NETLIST_COLUMNS, &records)?;
    report.info(&format!(
        "Exported {} nets to {}",
        records.len(),
        path.display()
    ));
    Ok(())
}

/// Export board outline segments to CSV file
pub fn export_board_outline_to_csv(
    design: &Design,
    path: &Path,
    report: &dyn Reporter,
) -> Result<()> {
    write_table(path, &OUTLINE_COLUMNS, &outline_records(design))?;
    report.info(&format!(
        "Exported board outline with {} segments to {}",
        design.outline.len(),
        path.display()
    ));
    Ok(())
}

/// Export the single graph-friendly pin table to CSV file
pub fn export_graph_to_csv(
    design: &Design,
    pins: &[ResolvedPin],
    path: &Path,
    report: &dyn Reporter,
) -> Result<()> {
    let connected = pins.iter().filter(|pin| pin.is_connected()).count();
    let nets = design
        .signals
        .iter()
        .filter(|s| s.name != UNCONNECTED)
        .count();
    report.info(&format!(
        "Found {connected} connected pins out of {} total pins",
        pins.len()
    ));
    report.info(&format!("Found {nets} signals with connections"));

    write_table(path, &GRAPH_COLUMNS, &graph_records(design, pins))?;
    report.info(&format!(
        "Exported {} pins to graph CSV: {}",
        pins.len(),
        path.display()
    ));
    Ok(())
}

/// Write all five tables. Stops at the first table that fails.
pub fn export_all(
    design: &Design,
    pins: &[ResolvedPin],
    paths: &OutputPaths,
    report: &dyn Reporter,
) -> Result<()> {
    export_pins_to_csv(pins, &paths.pins, report)?;
    export_connections_to_csv(pins, &paths.connections, report)?;
    export_netlist_to_csv(design, pins, &paths.netlist, report)?;
    export_board_outline_to_csv(design, &paths.board_outline, report)?;
    export_graph_to_csv(design, pins, &paths.graph, report)?;
    Ok(())
}
