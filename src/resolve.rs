// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Absolute pin positions and net membership
//!
//! Every component with a known shape contributes one pin per shape pin.
//! Shape offsets are mirrored, rotated and translated by the component
//! placement; the layer follows the flip flag; the net comes from the
//! first signal listing the (component, pin) pair.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::gencad::{flip_layer, Component, Design, Shape, TOP_LAYER};
use crate::geometry::{Placement, Point};
use crate::report::Reporter;

pub const UNCONNECTED: &str = "unconnected";
pub const DIODE_PREFIX: &str = "L-D";

/// Depth below the top layer used for every non-TOP pin.
pub const BOTTOM_DEPTH: f64 = -0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPin {
    pub id: usize,
    pub component: String,
    pub pin_name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub layer: String,
    pub signal: String,
}

impl ResolvedPin {
    pub fn is_connected(&self) -> bool {
        self.signal != UNCONNECTED
    }
}

pub fn depth_for_layer(layer: &str) -> f64 {
    if layer == TOP_LAYER {
        0.0
    } else {
        BOTTOM_DEPTH
    }
}

/// Components whose footprints have their two pads listed the wrong way
/// round.
pub fn is_diode(component: &str) -> bool {
    component.starts_with(DIODE_PREFIX)
}

/// (component, pin) -> net name, first declaring net wins.
#[derive(Debug, Default)]
pub struct NetIndex<'a> {
    nets: HashMap<&'a str, HashMap<&'a str, &'a str>>,
}

impl<'a> NetIndex<'a> {
    pub fn build(design: &'a Design) -> Self {
        let mut nets: HashMap<&str, HashMap<&str, &str>> = HashMap::new();
        for signal in &design.signals {
            for endpoint in &signal.endpoints {
                nets.entry(endpoint.component.as_str())
                    .or_default()
                    .entry(endpoint.pin.as_str())
                    .or_insert(signal.name.as_str());
            }
        }
        Self { nets }
    }

    pub fn lookup(&self, component: &str, pin: &str) -> Option<&'a str> {
        self.nets
            .get(component)
            .and_then(|pins| pins.get(pin))
            .copied()
    }

    pub fn signal_for(&self, component: &str, pin: &str) -> &'a str {
        self.lookup(component, pin).unwrap_or(UNCONNECTED)
    }
}

/// Sort the two pins by name and exchange their coordinates. Layers and
/// nets stay with the pin names.
pub fn swap_diode_pins(pins: &mut [ResolvedPin]) {
    pins.sort_by(|a, b| a.pin_name.cmp(&b.pin_name));
    if let [first, second] = pins {
        std::mem::swap(&mut first.x, &mut second.x);
        std::mem::swap(&mut first.y, &mut second.y);
    }
}

fn resolve_component(
    component: &Component,
    shape: &Shape,
    nets: &NetIndex<'_>,
    report: &dyn Reporter,
) -> Vec<ResolvedPin> {
    if component.placement.is_none() {
        report.warn(&format!(
            "Component {} has no placement, using origin",
            component.name
        ));
    }
    let placement = Placement::of(component);

    let mut pins: Vec<ResolvedPin> = shape
        .pins
        .iter()
        .map(|pin| {
            let position = placement.apply(Point::new(pin.x, pin.y));
            let layer = if component.flip {
                flip_layer(&pin.layer)
            } else {
                pin.layer.as_str()
            };
            ResolvedPin {
                id: 0,
                component: component.name.clone(),
                pin_name: pin.name.clone(),
                x: position.x,
                y: position.y,
                z: depth_for_layer(layer),
                layer: layer.to_string(),
                signal: nets.signal_for(&component.name, &pin.name).to_string(),
            }
        })
        .collect();

    if is_diode(&component.name) && pins.len() == 2 {
        swap_diode_pins(&mut pins);
        report.info(&format!(
            "Swapped coordinates for diode {}: Pin {} now at ({}, {}), Pin {} now at ({}, {})",
            component.name,
            pins[0].pin_name,
            pins[0].x,
            pins[0].y,
            pins[1].pin_name,
            pins[1].x,
            pins[1].y
        ));
    }

    pins
}

/// Resolve every pin of every placed component, in component declaration
/// order. Ids are assigned in output order starting at 0.
pub fn resolve_pins(design: &Design, report: &dyn Reporter) -> Vec<ResolvedPin> {
    let nets = NetIndex::build(design);
    let mut resolved = Vec::new();

    for component in &design.components {
        let Some(shape_name) = component.shape.as_deref() else {
            report.warn(&format!("Component {} has no shape defined", component.name));
            continue;
        };
        let Some(shape) = design.shapes.get(shape_name) else {
            report.warn(&format!(
                "Shape {shape_name} not found for component {}",
                component.name
            ));
            continue;
        };

        resolved.extend(resolve_component(component, shape, &nets, report));
    }

    for (id, pin) in resolved.iter_mut().enumerate() {
        pin.id = id;
    }

    report.info(&format!("Calculated positions for {} pins", resolved.len()));
    resolved
}
