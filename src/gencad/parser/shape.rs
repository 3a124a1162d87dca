// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! SHAPE block parser for the SHAPES section

use nom::{character::complete::space1, sequence::preceded, IResult, Parser};

use super::common::{keyword, number_pair, opt_unsigned, opt_word, quoted, word};
use super::{BlockParser, ContinuationResult};
use crate::gencad::{Shape, ShapePin, TOP_LAYER};
use crate::report::Reporter;

/// Context for parsing a single shape
#[derive(Debug, Clone)]
pub struct ShapeContext {
    pub name: String,
    pub pins: Vec<ShapePin>,
}

/// `PIN "<name>" <pad> <x> <y> [layer] [rotation]`
fn pin_line(input: &str) -> IResult<&str, ShapePin> {
    let (input, name) = preceded(keyword("PIN"), quoted).parse(input)?;
    let (input, pad) = preceded(space1, word).parse(input)?;
    let (input, (x, y)) = preceded(space1, number_pair).parse(input)?;
    let (input, layer) = opt_word(input)?;
    let (input, rotation) = opt_unsigned(input)?;

    Ok((
        input,
        ShapePin {
            name: name.to_string(),
            pad: pad.to_string(),
            x,
            y,
            layer: layer.unwrap_or(TOP_LAYER).to_string(),
            rotation: rotation.unwrap_or(0),
        },
    ))
}

/// Parser for SHAPE blocks
pub struct ShapeParser;

impl BlockParser for ShapeParser {
    type Item = Shape;
    type Context = ShapeContext;

    fn parse_header(&self, line: &str) -> Option<Self::Context> {
        let (_, name) = preceded(keyword("SHAPE"), quoted).parse(line).ok()?;
        Some(ShapeContext {
            name: name.to_string(),
            pins: Vec::new(),
        })
    }

    fn parse_continuation(
        &self,
        context: &mut Self::Context,
        line: &str,
        _report: &dyn Reporter,
    ) -> ContinuationResult {
        match pin_line(line) {
            Ok((_, pin)) => {
                context.pins.push(pin);
                ContinuationResult::Applied
            }
            Err(_) => ContinuationResult::Ignored,
        }
    }

    fn finalize(&self, context: Self::Context) -> Self::Item {
        Shape {
            name: context.name,
            pins: context.pins,
        }
    }

    fn item_name() -> &'static str {
        "SHAPE"
    }
}

#[cfg(test)]
mod tests {
    use super::super::SectionParser;
    use super::*;
    use crate::report::RecordingReporter;

    #[test]
    fn test_pin_line_defaults() {
        let (_, pin) = pin_line("PIN \"1\" SMD -1.5 0.25").unwrap();
        assert_eq!(pin.name, "1");
        assert_eq!(pin.pad, "SMD");
        assert_eq!((pin.x, pin.y), (-1.5, 0.25));
        assert_eq!(pin.layer, "TOP");
        assert_eq!(pin.rotation, 0);
    }

    #[test]
    fn test_pin_line_trailing_fields() {
        let (_, pin) = pin_line("PIN \"A1\" PAD_R 2 3 BOTTOM 90").unwrap();
        assert_eq!(pin.layer, "BOTTOM");
        assert_eq!(pin.rotation, 90);

        let (_, pin) = pin_line("PIN \"A1\" PAD_R 2 3 BOTTOM -90").unwrap();
        assert_eq!(pin.layer, "BOTTOM");
        assert_eq!(pin.rotation, 0);
    }

    #[test]
    fn test_pin_line_rejects_bad_numbers() {
        assert!(pin_line("PIN \"1\" SMD x 0").is_err());
        assert!(pin_line("PIN 1 SMD 0 0").is_err());
    }

    #[test]
    fn test_shape_section() {
        let report = RecordingReporter::new();
        let section = r#"PIN "0" SMD 0 0
SHAPE "R0603"
  INSERT SMD
  PIN "1" SMD -0.75 0
  PIN "2" SMD 0.75 0
SHAPE "TP"
  PIN "1" TH 0 0 BOTTOM"#;

        let shapes = SectionParser::new(ShapeParser).parse(section, &report);

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].name, "R0603");
        assert_eq!(shapes[0].pins.len(), 2);
        assert_eq!(shapes[0].pins[1].x, 0.75);
        assert_eq!(shapes[1].name, "TP");
        assert_eq!(shapes[1].pins[0].layer, "BOTTOM");
    }
}
