// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! COMPONENT block parser for the COMPONENTS section

use nom::{sequence::preceded, Parser};

use super::common::{keyword, number_pair, number_token, quoted, word};
use super::{BlockParser, ContinuationResult};
use crate::gencad::Component;
use crate::report::Reporter;

/// Context for parsing a single component
#[derive(Debug, Clone)]
pub struct ComponentContext {
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

impl ComponentContext {
    pub fn new(name: String) -> Self {
        Self {
            name,
            device: None,
            shape: None,
            placement: None,
            layer: None,
            rotation: 0,
            mirror_x: false,
            mirror_y: false,
            flip: false,
        }
    }
}

/// Parser for COMPONENT blocks
pub struct ComponentParser;

impl BlockParser for ComponentParser {
    type Item = Component;
    type Context = ComponentContext;

    fn parse_header(&self, line: &str) -> Option<Self::Context> {
        let (_, name) = preceded(keyword("COMPONENT"), quoted).parse(line).ok()?;
        Some(ComponentContext::new(name.to_string()))
    }

    fn parse_continuation(
        &self,
        context: &mut Self::Context,
        line: &str,
        report: &dyn Reporter,
    ) -> ContinuationResult {
        if let Ok((_, device)) = preceded(keyword("DEVICE"), quoted).parse(line) {
            context.device = Some(device.to_string());
            return ContinuationResult::Applied;
        }

        if let Ok((_, placement)) = preceded(keyword("PLACE"), number_pair).parse(line) {
            context.placement = Some(placement);
            return ContinuationResult::Applied;
        }

        if let Ok((_, layer)) = preceded(keyword("LAYER"), word).parse(line) {
            context.layer = Some(layer.to_string());
            return ContinuationResult::Applied;
        }

        if let Ok((_, value)) = preceded(keyword("ROTATION"), number_token).parse(line) {
            context.rotation = match value.parse::<f64>() {
                Ok(degrees) => (degrees.trunc() % 360.0) as i32,
                Err(_) => {
                    report.warn(&format!(
                        "Invalid rotation value for component {}: {value}",
                        context.name
                    ));
                    0
                }
            };
            return ContinuationResult::Applied;
        }

        if let Ok((_, shape)) = preceded(keyword("SHAPE"), quoted).parse(line) {
            context.shape = Some(shape.to_string());
            return ContinuationResult::Applied;
        }

        self.parse_flags(context, line)
    }

    fn finalize(&self, context: Self::Context) -> Self::Item {
        Component {
            name: context.name,
            device: context.device,
            shape: context.shape,
            placement: context.placement,
            layer: context.layer,
            rotation: context.rotation,
            mirror_x: context.mirror_x,
            mirror_y: context.mirror_y,
            flip: context.flip,
        }
    }

    fn item_name() -> &'static str {
        "COMPONENT"
    }
}

impl ComponentParser {
    // Flags are matched anywhere in the line, not as whole tokens.
    fn parse_flags(&self, context: &mut ComponentContext, line: &str) -> ContinuationResult {
        let mut result = ContinuationResult::Ignored;
        if line.contains("MIRRORX") {
            context.mirror_x = true;
            result = ContinuationResult::Applied;
        }
        if line.contains("MIRRORY") {
            context.mirror_y = true;
            result = ContinuationResult::Applied;
        }
        if line.contains("FLIP") {
            context.flip = true;
            result = ContinuationResult::Applied;
        }
        result
    }
}
