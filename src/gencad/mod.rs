// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use serde::{Deserialize, Serialize};

use self::table::{Keyed, Table};

pub const DEFAULT_UNITS: &str = "INCH";
pub const TOP_LAYER: &str = "TOP";
pub const BOTTOM_LAYER: &str = "BOTTOM";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePin {
    pub name: String,
    pub pad: String,
    pub x: f64,
    pub y: f64,
    pub layer: String,
    pub rotation: i32, // local pad rotation, informational only
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub name: String,
    pub pins: Vec<ShapePin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub device: Option<String>,
    pub shape: Option<String>,
    pub placement: Option<(f64, f64)>,
    pub layer: Option<String>,
    pub rotation: i32,
    pub mirror_x: bool,
    pub mirror_y: bool,
    pub flip: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub component: String,
    pub pin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    pub endpoints: Vec<Endpoint>,
}

impl Keyed for Shape {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Component {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Signal {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Everything parsed out of one GENCAD document.
#[derive(Debug, Clone)]
pub struct Design {
    pub units: String,
    pub outline: Vec<OutlineSegment>,
    pub shapes: Table<Shape>,
    pub components: Table<Component>,
    pub signals: Table<Signal>,
}

impl Design {
    pub fn new() -> Self {
        Self {
            units: DEFAULT_UNITS.to_string(),
            outline: Vec::new(),
            shapes: Table::new(),
            components: Table::new(),
            signals: Table::new(),
        }
    }

    /// Name of the first signal, in declaration order, listing this
    /// (component, pin) endpoint.
    pub fn find_signal(&self, component: &str, pin: &str) -> Option<&str> {
        self.signals
            .iter()
            .find(|signal| {
                signal
                    .endpoints
                    .iter()
                    .any(|ep| ep.component == component && ep.pin == pin)
            })
            .map(|signal| signal.name.as_str())
    }
}

impl Default for Design {
    fn default() -> Self {
        Self::new()
    }
}

/// TOP and BOTTOM swap places; any other layer name is kept.
pub fn flip_layer(layer: &str) -> &str {
    match layer {
        TOP_LAYER => BOTTOM_LAYER,
        BOTTOM_LAYER => TOP_LAYER,
        other => other,
    }
}

pub mod parser;
pub mod reader;
pub mod section;
pub mod table;
