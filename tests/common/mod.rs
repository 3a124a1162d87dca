// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Small board exercising rotation, mirroring, flip, diode correction,
/// unresolvable shapes and dangling net endpoints.
///
/// Resolved pin order:
/// 0 R1:1 (9,10) VCC, 1 R1:2 (11,10) GND, 2 R2:1 (20,11) VCC,
/// 3 R2:2 (20,9) OUT, 4 L-D1:1 (31,5) VCC, 5 L-D1:2 (29,5),
/// 6 L-D2:1 (4,14), 7 L-D2:2 (6,14), 8 L-D2:3 (5,16) GND
pub const BOARD: &str = r#"$HEADER
GENCAD 1.4
UNITS MM
$ENDHEADER
$BOARD
LINE 0 0 40 0
LINE 40 0 40 20
$ENDBOARD
$SHAPES
SHAPE "R0603"
PIN "1" SMD -1 0 TOP 0
PIN "2" SMD 1 0 TOP 0
SHAPE "SOT23"
PIN "1" SMD -1 -1
PIN "2" SMD 1 -1
PIN "3" SMD 0 1
$ENDSHAPES
$COMPONENTS
COMPONENT "R1"
DEVICE "10K"
PLACE 10 10
LAYER TOP
ROTATION 0
SHAPE "R0603"
COMPONENT "R2"
PLACE 20 10
ROTATION 90
SHAPE "R0603"
MIRRORX
COMPONENT "L-D1"
PLACE 30 5
SHAPE "R0603"
FLIP
COMPONENT "L-D2"
PLACE 5 15
SHAPE "SOT23"
COMPONENT "U9"
PLACE 0 0
SHAPE "MISSING"
COMPONENT "NOSHAPE"
PLACE 1 1
$ENDCOMPONENTS
$SIGNALS
SIGNAL "VCC"
NODE "R1" "1"
NODE "R2" "1"
NODE "L-D1" "1"
NODE "GHOST" "7"
SIGNAL "GND"
NODE "R1" "2"
NODE "L-D2" "3"
SIGNAL "OUT"
NODE "R2" "2"
$ENDSIGNALS
"#;

pub fn write_board(dir: &Path) -> PathBuf {
    let path = dir.join("board.cad");
    fs::write(&path, BOARD).unwrap();
    path
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
