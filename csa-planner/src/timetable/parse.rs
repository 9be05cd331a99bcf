//! Line-oriented record parsing.
//!
//! Timetables and queries share one wire shape: a fixed number of
//! whitespace-separated non-negative integers per line, with a blank line
//! ending the block.

use std::io::BufRead;

use super::error::RecordError;
use crate::domain::{Connection, StationId, Timestamp};

/// Parse exactly `N` whitespace-separated `u32` fields from a line.
pub fn parse_record<const N: usize>(line: &str) -> Result<[u32; N], RecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != N {
        return Err(RecordError::WrongFieldCount {
            expected: N,
            found: tokens.len(),
        });
    }

    let mut fields = [0u32; N];
    for (i, (slot, token)) in fields.iter_mut().zip(&tokens).enumerate() {
        *slot = token.parse().map_err(|source| RecordError::InvalidNumber {
            field: i + 1,
            token: (*token).to_string(),
            source,
        })?;
    }

    Ok(fields)
}

/// Parse a `departure_station arrival_station departure_time arrival_time` line.
pub fn parse_connection(line: &str) -> Result<Connection, RecordError> {
    let [dep, arr, dep_time, arr_time] = parse_record::<4>(line)?;
    Ok(Connection::new(
        StationId(dep),
        StationId(arr),
        Timestamp(dep_time),
        Timestamp(arr_time),
    ))
}

/// Reads lines until a blank line or end of input.
///
/// Yields `(line_number, trimmed_line)` pairs. Line numbers count from the
/// first line this reader was handed, starting at 1. The terminating blank
/// line is consumed so that the next block can be read from the same stream.
///
/// Invalid UTF-8 is replaced rather than reported, so such a line reaches the
/// record parser and fails there like any other malformed line.
pub struct Block<'a, R> {
    reader: &'a mut R,
    line_number: usize,
    finished: bool,
    bytes: Vec<u8>,
    line: String,
}

impl<'a, R: BufRead> Block<'a, R> {
    /// Start reading a block at the reader's current position.
    pub fn new(reader: &'a mut R, first_line_number: usize) -> Self {
        Self {
            reader,
            line_number: first_line_number.saturating_sub(1),
            finished: false,
            bytes: Vec::new(),
            line: String::new(),
        }
    }

    /// Number of the last line consumed (including the terminator).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next non-terminating line.
    pub fn next_line(&mut self) -> std::io::Result<Option<(usize, &str)>> {
        if self.finished {
            return Ok(None);
        }

        self.bytes.clear();
        if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
            self.finished = true;
            return Ok(None);
        }
        self.line_number += 1;
        self.line = String::from_utf8_lossy(&self.bytes).into_owned();

        let trimmed = self.line.trim();
        if trimmed.is_empty() {
            self.finished = true;
            return Ok(None);
        }

        Ok(Some((self.line_number, trimmed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_record_accepts_extra_whitespace() {
        assert_eq!(parse_record::<3>("  1   3\t4000 ").unwrap(), [1, 3, 4000]);
    }

    #[test]
    fn parse_record_wrong_count() {
        assert_eq!(
            parse_record::<4>("1 2 3"),
            Err(RecordError::WrongFieldCount {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            parse_record::<3>("1 2 3 4"),
            Err(RecordError::WrongFieldCount {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn parse_record_reports_bad_field() {
        match parse_record::<4>("1 two 2000 3000") {
            Err(RecordError::InvalidNumber { field, token, .. }) => {
                assert_eq!(field, 2);
                assert_eq!(token, "two");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn parse_record_rejects_negative() {
        assert!(matches!(
            parse_record::<3>("1 3 -5"),
            Err(RecordError::InvalidNumber { field: 3, .. })
        ));
    }

    #[test]
    fn parse_connection_fields_in_order() {
        let c = parse_connection("1 2 2000 3000").unwrap();
        assert_eq!(c.departure_station, StationId(1));
        assert_eq!(c.arrival_station, StationId(2));
        assert_eq!(c.departure_time, Timestamp(2000));
        assert_eq!(c.arrival_time, Timestamp(3000));
    }

    #[test]
    fn block_stops_at_blank_line() {
        let mut input = Cursor::new("1 2 3\n4 5 6\n\n7 8 9\n");
        let mut block = Block::new(&mut input, 1);

        assert_eq!(block.next_line().unwrap(), Some((1, "1 2 3")));
        assert_eq!(block.next_line().unwrap(), Some((2, "4 5 6")));
        assert_eq!(block.next_line().unwrap(), None);
        assert_eq!(block.next_line().unwrap(), None);
        assert_eq!(block.line_number(), 3);

        // The rest of the stream is untouched
        let mut rest = Block::new(&mut input, 4);
        assert_eq!(rest.next_line().unwrap(), Some((4, "7 8 9")));
        assert_eq!(rest.next_line().unwrap(), None);
    }

    #[test]
    fn block_treats_whitespace_only_line_as_blank() {
        let mut input = Cursor::new("1 2 3\n   \t\n4 5 6\n");
        let mut block = Block::new(&mut input, 1);

        assert_eq!(block.next_line().unwrap(), Some((1, "1 2 3")));
        assert_eq!(block.next_line().unwrap(), None);
    }

    #[test]
    fn block_replaces_invalid_utf8() {
        let mut input = Cursor::new(b"1 \xff 3\n4 5 6\n".to_vec());
        let mut block = Block::new(&mut input, 1);

        let (line, text) = block.next_line().unwrap().unwrap();
        assert_eq!(line, 1);
        assert_eq!(text, "1 \u{fffd} 3");
        assert!(matches!(
            parse_record::<3>(text),
            Err(RecordError::InvalidNumber { field: 2, .. })
        ));
        assert_eq!(block.next_line().unwrap(), Some((2, "4 5 6")));
    }

    #[test]
    fn block_ends_at_eof_without_blank_line() {
        let mut input = Cursor::new("1 2 3");
        let mut block = Block::new(&mut input, 1);

        assert_eq!(block.next_line().unwrap(), Some((1, "1 2 3")));
        assert_eq!(block.next_line().unwrap(), None);
    }
}
