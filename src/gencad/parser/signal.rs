// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! SIGNAL block parser for the SIGNALS section

use nom::{character::complete::space1, sequence::preceded, IResult, Parser};

use super::common::{keyword, quoted};
use super::{BlockParser, ContinuationResult};
use crate::gencad::{Endpoint, Signal};
use crate::report::Reporter;

/// Context for parsing a single signal
#[derive(Debug, Clone)]
pub struct SignalContext {
    pub name: String,
    pub endpoints: Vec<Endpoint>,
}

/// `NODE "<component>" "<pin>"`
fn node_line(input: &str) -> IResult<&str, Endpoint> {
    let (input, component) = preceded(keyword("NODE"), quoted).parse(input)?;
    let (input, pin) = preceded(space1, quoted).parse(input)?;
    Ok((
        input,
        Endpoint {
            component: component.to_string(),
            pin: pin.to_string(),
        },
    ))
}

/// Parser for SIGNAL blocks
pub struct SignalParser;

impl BlockParser for SignalParser {
    type Item = Signal;
    type Context = SignalContext;

    fn parse_header(&self, line: &str) -> Option<Self::Context> {
        let (_, name) = preceded(keyword("SIGNAL"), quoted).parse(line).ok()?;
        Some(SignalContext {
            name: name.to_string(),
            endpoints: Vec::new(),
        })
    }

    fn parse_continuation(
        &self,
        context: &mut Self::Context,
        line: &str,
        _report: &dyn Reporter,
    ) -> ContinuationResult {
        match node_line(line) {
            Ok((_, endpoint)) => {
                context.endpoints.push(endpoint);
                ContinuationResult::Applied
            }
            Err(_) => ContinuationResult::Ignored,
        }
    }

    fn finalize(&self, context: Self::Context) -> Self::Item {
        Signal {
            name: context.name,
            endpoints: context.endpoints,
        }
    }

    fn item_name() -> &'static str {
        "SIGNAL"
    }
}

#[cfg(test)]
mod tests {
    use super::super::SectionParser;
    use super::*;
    use crate::report::RecordingReporter;

    #[test]
    fn test_node_line() {
        let (_, endpoint) = node_line("NODE \"R1\" \"2\"").unwrap();
        assert_eq!(endpoint.component, "R1");
        assert_eq!(endpoint.pin, "2");
        assert!(node_line("NODE R1 2").is_err());
    }

    #[test]
    fn test_signal_section() {
        let report = RecordingReporter::new();
        let section = r#"NODE "X" "1"
SIGNAL "GND"
  NODE "R1" "2"
  NODE "C1" "1"
SIGNAL "NC"
SIGNAL "GND"
  NODE "U1" "4""#;

        let signals = SectionParser::new(SignalParser).parse(section, &report);

        assert_eq!(signals.len(), 3);
        assert_eq!(signals[0].endpoints.len(), 2);
        assert!(signals[1].endpoints.is_empty());
        assert_eq!(signals[2].name, "GND");
        assert_eq!(report.messages(log::Level::Debug).len(), 1);
    }
}
