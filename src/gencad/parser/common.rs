// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Token parsers shared by the GENCAD directive parsers

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, space1},
    combinator::{map_res, opt},
    sequence::{delimited, preceded, terminated},
    IResult, Parser,
};

/// Directive keyword followed by at least one blank, e.g. `PIN `.
pub fn keyword<'a>(kw: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input| terminated(tag(kw), space1).parse(input)
}

/// Non-empty double-quoted name; the quotes are dropped.
pub fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while1(|c: char| c != '"'), char('"')).parse(input)
}

/// Letters, digits and underscores.
pub fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_').parse(input)
}

/// Raw numeric-looking token: digits, signs and decimal points.
pub fn number_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit() || c == '-' || c == '.').parse(input)
}

/// Numeric token that must also convert to a float.
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(number_token, str::parse::<f64>).parse(input)
}

/// Two numbers separated by blanks.
pub fn number_pair(input: &str) -> IResult<&str, (f64, f64)> {
    (number, preceded(space1, number)).parse(input)
}

/// Optional ` <word>` trailer.
pub fn opt_word(input: &str) -> IResult<&str, Option<&str>> {
    opt(preceded(space1, word)).parse(input)
}

/// Optional ` <unsigned integer>` trailer.
pub fn opt_unsigned(input: &str) -> IResult<&str, Option<i32>> {
    opt(preceded(space1, map_res(digit1, str::parse::<i32>))).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_requires_blank() {
        assert_eq!(keyword("PIN")("PIN \"1\""), Ok(("\"1\"", "PIN")));
        assert!(keyword("PIN")("PINS 3").is_err());
        assert!(keyword("PLACE")("PLACEMENT 1 2").is_err());
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("\"R 1\" rest"), Ok((" rest", "R 1")));
        assert!(quoted("\"\"").is_err());
        assert!(quoted("R1").is_err());
    }

    #[test]
    fn test_number() {
        assert_eq!(number("-1.25 x"), Ok((" x", -1.25)));
        assert_eq!(number(".5"), Ok(("", 0.5)));
        assert!(number("-").is_err());
        assert!(number("1.2.3").is_err());
        assert!(number("abc").is_err());
    }

    #[test]
    fn test_number_pair() {
        assert_eq!(number_pair("10 -20.5"), Ok(("", (10.0, -20.5))));
        assert!(number_pair("10").is_err());
    }

    #[test]
    fn test_optional_trailers() {
        assert_eq!(opt_word(" BOTTOM 90"), Ok((" 90", Some("BOTTOM"))));
        assert_eq!(opt_word(""), Ok(("", None)));
        assert_eq!(opt_unsigned(" 90"), Ok(("", Some(90))));
        assert_eq!(opt_unsigned(" -90"), Ok((" -90", None)));
    }
}
