// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

/// Unit label from the first `UNITS` line of the HEADER section that
/// carries a value.
pub fn parse_units(section: &str) -> Option<String> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("UNITS"))
        .find_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
}
