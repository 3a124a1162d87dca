// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Pin position resolution tests
//!
//! Tests cover:
//! - Placement transforms (identity, rotation, mirroring, flip)
//! - Diode coordinate correction
//! - Net assignment and dangling endpoints
//! - Determinism across repeated runs

mod common;

use gencad_pins::gencad::reader::parse_gencad;
use gencad_pins::{resolve_pins, RecordingReporter, ResolvedPin};

const EPSILON: f64 = 1e-9;

fn resolve(content: &str) -> (Vec<ResolvedPin>, RecordingReporter) {
    let report = RecordingReporter::new();
    let design = parse_gencad(content, &report);
    let pins = resolve_pins(&design, &report);
    (pins, report)
}

fn assert_at(pin: &ResolvedPin, x: f64, y: f64) {
    assert!(
        (pin.x - x).abs() < EPSILON && (pin.y - y).abs() < EPSILON,
        "{}:{} at ({}, {}), expected ({x}, {y})",
        pin.component,
        pin.pin_name,
        pin.x,
        pin.y
    );
}

fn single_component(component_body: &str) -> String {
    format!(
        r#"$SHAPES
SHAPE "S"
PIN "1" SMD 2 3
PIN "2" SMD -1 0 BOTTOM
$ENDSHAPES
$COMPONENTS
COMPONENT "U1"
SHAPE "S"
{component_body}
$ENDCOMPONENTS
$SIGNALS
$ENDSIGNALS"#
    )
}

#[test]
fn test_sample_board_positions() {
    let (pins, report) = resolve(common::BOARD);

    let expected = [
        ("R1", "1", 9.0, 10.0, "TOP", "VCC"),
        ("R1", "2", 11.0, 10.0, "TOP", "GND"),
        ("R2", "1", 20.0, 11.0, "TOP", "VCC"),
        ("R2", "2", 20.0, 9.0, "TOP", "OUT"),
        ("L-D1", "1", 31.0, 5.0, "BOTTOM", "VCC"),
        ("L-D1", "2", 29.0, 5.0, "BOTTOM", "unconnected"),
        ("L-D2", "1", 4.0, 14.0, "TOP", "unconnected"),
        ("L-D2", "2", 6.0, 14.0, "TOP", "unconnected"),
        ("L-D2", "3", 5.0, 16.0, "TOP", "GND"),
    ];

    assert_eq!(pins.len(), expected.len());
    for (i, (pin, (component, name, x, y, layer, signal))) in
        pins.iter().zip(expected).enumerate()
    {
        assert_eq!(pin.id, i);
        assert_eq!(pin.component, component);
        assert_eq!(pin.pin_name, name);
        assert_at(pin, x, y);
        assert_eq!(pin.layer, layer);
        assert_eq!(pin.signal, signal);
    }

    let warnings = report.warnings();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0], "Shape MISSING not found for component U9");
    assert_eq!(warnings[1], "Component NOSHAPE has no shape defined");
}

#[test]
fn test_identity_placement() {
    let (pins, _) = resolve(&single_component("PLACE 0 0\nROTATION 0"));

    assert_at(&pins[0], 2.0, 3.0);
    assert_at(&pins[1], -1.0, 0.0);
    assert_eq!(pins[0].z, 0.0);
    assert_eq!(pins[1].layer, "BOTTOM");
    assert_eq!(pins[1].z, -0.1);
}

#[test]
fn test_rotation_90() {
    let (pins, _) = resolve(&single_component("PLACE 0 0\nROTATION 90"));

    assert_at(&pins[0], -3.0, 2.0);
    assert_at(&pins[1], 0.0, -1.0);
}

#[test]
fn test_fractional_rotation_is_truncated() {
    let (pins, _) = resolve(&single_component("PLACE 0 0\nROTATION 90.7"));

    assert_at(&pins[0], -3.0, 2.0);
}

#[test]
fn test_mirror_is_applied_before_rotation() {
    let (pins, _) = resolve(&single_component("PLACE 10 10\nROTATION 90\nMIRRORX"));

    assert_at(&pins[0], 7.0, 8.0);
}

#[test]
fn test_mirror_y() {
    let (pins, _) = resolve(&single_component("PLACE 0 0\nMIRRORY"));

    assert_at(&pins[0], 2.0, -3.0);
}

#[test]
fn test_flip_swaps_layers() {
    let (pins, _) = resolve(&single_component("PLACE 0 0\nFLIP"));

    assert_eq!(pins[0].layer, "BOTTOM");
    assert_eq!(pins[0].z, -0.1);
    assert_eq!(pins[1].layer, "TOP");
    assert_eq!(pins[1].z, 0.0);
}

#[test]
fn test_invalid_rotation_falls_back_to_zero() {
    let (pins, report) = resolve(&single_component("PLACE 0 0\nROTATION 1.2.3"));

    assert_at(&pins[0], 2.0, 3.0);
    assert_eq!(
        report.warnings(),
        vec!["Invalid rotation value for component U1: 1.2.3".to_string()]
    );
}

#[test]
fn test_diode_swaps_against_plain_twin() {
    let content = r#"$SHAPES
SHAPE "D"
PIN "2" SMD 1 0
PIN "1" SMD -1 0
$ENDSHAPES
$COMPONENTS
COMPONENT "L-D7"
PLACE 3 4
ROTATION 180
SHAPE "D"
COMPONENT "D7"
PLACE 3 4
ROTATION 180
SHAPE "D"
$ENDCOMPONENTS
$SIGNALS
SIGNAL "A"
NODE "L-D7" "1"
NODE "D7" "1"
SIGNAL "K"
NODE "L-D7" "2"
NODE "D7" "2"
$ENDSIGNALS"#;

    let (pins, report) = resolve(content);
    let (diode, twin) = pins.split_at(2);

    // The twin keeps shape order; the diode is emitted sorted by pin name.
    assert_eq!(twin[0].pin_name, "2");
    assert_eq!(twin[1].pin_name, "1");
    assert_eq!(diode[0].pin_name, "1");
    assert_eq!(diode[1].pin_name, "2");

    assert_at(&diode[0], twin[0].x, twin[0].y);
    assert_at(&diode[1], twin[1].x, twin[1].y);

    assert_eq!(diode[0].signal, "A");
    assert_eq!(diode[1].signal, "K");
    assert_eq!(diode[0].layer, twin[1].layer);

    assert!(report
        .messages(log::Level::Info)
        .iter()
        .any(|m| m.starts_with("Swapped coordinates for diode L-D7")));
}

#[test]
fn test_three_pin_diode_is_untouched() {
    let (pins, _) = resolve(common::BOARD);
    let diode: Vec<&ResolvedPin> = pins.iter().filter(|p| p.component == "L-D2").collect();

    assert_eq!(diode.len(), 3);
    assert_at(diode[0], 4.0, 14.0);
    assert_at(diode[1], 6.0, 14.0);
    assert_at(diode[2], 5.0, 16.0);
}

#[test]
fn test_dangling_endpoint_creates_no_pin() {
    let (pins, _) = resolve(common::BOARD);

    assert!(pins.iter().all(|p| p.component != "GHOST"));
}

#[test]
fn test_missing_shapes_yields_no_pins() {
    let content = common::BOARD
        .replace("$SHAPES", "")
        .replace("$ENDSHAPES", "");

    let (pins, report) = resolve(&content);

    assert!(pins.is_empty());
    assert!(report
        .messages(log::Level::Info)
        .contains(&"Calculated positions for 0 pins".to_string()));
}

#[test]
fn test_resolution_is_deterministic() {
    let (first, _) = resolve(common::BOARD);
    let (second, _) = resolve(common::BOARD);

    assert_eq!(first, second);
}
