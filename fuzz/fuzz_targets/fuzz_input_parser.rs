//! Fuzz target for the terminal input parser.
//!
//! Arbitrary bytes from the terminal must never panic the parser, and
//! `parse_all` must always make progress or stop at an incomplete tail.

#![no_main]

use experience_panel::input::{InputParser, ParseError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut parser = InputParser::new();
    let mut remaining = data;

    while !remaining.is_empty() {
        match parser.parse(remaining) {
            Ok((_event, consumed)) => {
                assert!(consumed > 0, "parser consumed nothing");
                remaining = &remaining[consumed..];
            }
            Err(ParseError::Empty | ParseError::Incomplete) => break,
            Err(ParseError::UnrecognizedSequence(_) | ParseError::InvalidUtf8) => {
                remaining = &remaining[1..];
            }
        }
    }

    let (events, consumed) = InputParser::new().parse_all(data);
    assert!(consumed <= data.len());
    assert!(events.len() <= data.len());
});
