//! `Content-Range` header values.
//!
//! ref: https://www.rfc-editor.org/rfc/rfc9110#section-14.4
//!
//! Only the complete form with the `bytes` unit is accepted:
//!
//! ```text
//! Content-Range: bytes <start>-<end>/<size>
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{delimited, preceded, separated_pair};
use nom::{IResult, Parser};

use crate::error::{Error, Result};

pub const CONTENT_RANGE: &str = "Content-Range";

const BYTES_UNIT: &str = "bytes ";

/// A byte range with the total size of the representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    pub start: i64,
    pub end: i64,
    pub size: i64,
}

impl ContentRange {
    /// Number of bytes covered by the range, both ends included. Saturates at
    /// `i64::MAX`; an inverted range has length 0.
    pub fn len(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

fn number(input: &str) -> IResult<&str, i64> {
    delimited(space0, map_res(digit1, str::parse::<i64>), space0).parse(input)
}

fn content_range(input: &str) -> IResult<&str, ((i64, i64), i64)> {
    preceded(
        tag(BYTES_UNIT),
        separated_pair(separated_pair(number, char('-'), number), char('/'), number),
    )
    .parse(input)
}

/// Parses a `Content-Range` header value.
///
/// Returns [`Error::InvalidRangeFormat`] when the value does not follow the
/// grammar and [`Error::InvalidRange`] when `start > end` or `end > size`.
pub fn parse_content_range(s: &str) -> Result<ContentRange> {
    let (_, ((start, end), size)) = all_consuming(content_range)
        .parse(s)
        .map_err(|_| Error::InvalidRangeFormat)?;

    if start > end || end > size {
        return Err(Error::InvalidRange);
    }

    Ok(ContentRange { start, end, size })
}

impl FromStr for ContentRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_content_range(s)
    }
}

impl Display for ContentRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}/{}", BYTES_UNIT, self.start, self.end, self.size)
    }
}
