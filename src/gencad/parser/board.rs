// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use nom::{character::complete::space1, sequence::preceded, IResult, Parser};

use super::common::{keyword, number_pair};
use crate::gencad::OutlineSegment;

fn outline_line(input: &str) -> IResult<&str, OutlineSegment> {
    let (input, (x1, y1)) = preceded(keyword("LINE"), number_pair).parse(input)?;
    let (input, (x2, y2)) = preceded(space1, number_pair).parse(input)?;
    Ok((input, OutlineSegment { x1, y1, x2, y2 }))
}

/// `LINE x1 y1 x2 y2` segments of the BOARD section, in source order.
pub fn parse_outline(section: &str) -> Vec<OutlineSegment> {
    section
        .lines()
        .map(str::trim)
        .filter_map(|line| outline_line(line).ok().map(|(_, segment)| segment))
        .collect()
}
