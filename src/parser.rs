use std::io::Read;
use std::str::FromStr;

use nom::character::complete::digit1;
use nom::combinator::map_res;
use nom::{Finish, IResult, Parser};

use crate::Error;

pub fn unsigned<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(digit1, N::from_str).parse(input)
}

// Run a parser over the whole input, converting the borrowed nom error into
// an owned one so it can outlive the input buffer.
pub fn parse_all<O, P>(mut parser: P, input: &str) -> Result<O, nom::error::Error<String>>
where
    P: for<'i> Parser<&'i str, O, nom::error::Error<&'i str>>,
{
    match parser.parse(input).finish() {
        Ok((_rest, value)) => Ok(value),
        Err(nom::error::Error { input, code }) => Err(nom::error::Error {
            input: input.to_owned(),
            code,
        }),
    }
}

pub fn read_from_stdin_and_parse<O, P>(parser: P) -> Result<O, Error>
where
    P: for<'i> Parser<&'i str, O, nom::error::Error<&'i str>>,
{
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    parse_all(parser, &input).map_err(Error::Parse)
}
