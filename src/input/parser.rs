//! ANSI sequence parser for terminal input.
//!
//! Decodes raw bytes into [`Event`]s. Supported:
//! - SGR mouse encoding (1006): `ESC [ < Pb ; Px ; Py M` / `m`
//! - printable ASCII and UTF-8 characters, Enter, Backspace, Ctrl+letter
//! - a lone Escape when followed by another escape or a non-sequence byte
//!
//! Other CSI sequences are reported as unrecognized so the caller can skip
//! them.

// Self is used for consistency with other methods even when not needed
#![allow(clippy::unused_self)]

use crate::input::event::{Event, Key};
use crate::input::mouse::{MouseButton, MouseEvent, MouseEventKind};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete escape sequence (need more bytes).
    Incomplete,
    /// Unrecognized escape sequence; skip these bytes.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 in input; skip one byte.
    InvalidUtf8,
}

/// Result of parsing input: the event and the number of bytes consumed.
pub type ParseResult = Result<(Event, usize), ParseError>;

/// Stateless-by-default input parser.
#[derive(Clone, Debug, Default)]
pub struct InputParser {
    _private: (),
}

impl InputParser {
    /// Create a new input parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one event from the front of `input`.
    ///
    /// Call repeatedly, advancing by the consumed count, until
    /// `Err(ParseError::Empty)` or `Err(ParseError::Incomplete)`.
    pub fn parse(&mut self, input: &[u8]) -> ParseResult {
        let Some(&first) = input.first() else {
            return Err(ParseError::Empty);
        };

        match first {
            0x1b => self.parse_escape(input),
            b'\r' | b'\n' => Ok((Key::Enter.into(), 1)),
            0x7f | 0x08 => Ok((Key::Backspace.into(), 1)),
            0x01..=0x1a => {
                let c = (first - 1 + b'a') as char;
                Ok((Key::Ctrl(c).into(), 1))
            }
            0x20..=0x7e => Ok((Key::Char(first as char).into(), 1)),
            0x80..=0xff => self.parse_utf8(input),
            _ => Err(ParseError::UnrecognizedSequence(vec![first])),
        }
    }

    /// Parse every complete event in `input`.
    ///
    /// Returns the events and the number of bytes consumed; an incomplete
    /// trailing sequence is left unconsumed. Unrecognized bytes are skipped.
    pub fn parse_all(&mut self, input: &[u8]) -> (Vec<Event>, usize) {
        let mut events = Vec::new();
        let mut offset = 0;
        while offset < input.len() {
            match self.parse(&input[offset..]) {
                Ok((event, consumed)) => {
                    events.push(event);
                    offset += consumed;
                }
                Err(ParseError::Empty | ParseError::Incomplete) => break,
                Err(ParseError::UnrecognizedSequence(bytes)) => offset += bytes.len().max(1),
                Err(ParseError::InvalidUtf8) => offset += 1,
            }
        }
        (events, offset)
    }

    fn parse_escape(&mut self, input: &[u8]) -> ParseResult {
        match input.get(1) {
            None => Err(ParseError::Incomplete),
            Some(b'[') => self.parse_csi(input),
            Some(_) => Ok((Key::Esc.into(), 1)),
        }
    }

    fn parse_csi(&mut self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        // Find the final byte (0x40-0x7e)
        let Some(end) = input[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|pos| pos + 2)
        else {
            return Err(ParseError::Incomplete);
        };

        let params = &input[2..end];
        match input[end] {
            b'M' | b'm' if params.first() == Some(&b'<') => self.parse_sgr_mouse(input, end),
            _ => Err(ParseError::UnrecognizedSequence(input[..=end].to_vec())),
        }
    }

    /// Parse SGR mouse encoding (ESC [ < Pb ; Px ; Py M/m).
    fn parse_sgr_mouse(&self, input: &[u8], end: usize) -> ParseResult {
        let unrecognized = || ParseError::UnrecognizedSequence(input[..=end].to_vec());
        let is_release = input[end] == b'm';

        let params = std::str::from_utf8(&input[3..end]).map_err(|_| unrecognized())?;
        let mut parts = params.split(';');
        let mut field = || parts.next().and_then(|p| p.parse::<u32>().ok());

        let (Some(cb), Some(cx), Some(cy)) = (field(), field(), field()) else {
            return Err(unrecognized());
        };
        let cb = u8::try_from(cb).map_err(|_| unrecognized())?;

        let (button, mut kind) = decode_sgr_button(cb);
        if is_release {
            kind = MouseEventKind::Release;
        }
        let event = MouseEvent::new(cx.saturating_sub(1), cy.saturating_sub(1), button, kind);
        Ok((Event::Mouse(event), end + 1))
    }

    fn parse_utf8(&self, input: &[u8]) -> ParseResult {
        let first = input[0];
        let expected_len = if first & 0b1110_0000 == 0b1100_0000 {
            2
        } else if first & 0b1111_0000 == 0b1110_0000 {
            3
        } else if first & 0b1111_1000 == 0b1111_0000 {
            4
        } else {
            return Err(ParseError::InvalidUtf8);
        };

        if input.len() < expected_len {
            return Err(ParseError::Incomplete);
        }

        let s = std::str::from_utf8(&input[..expected_len]).map_err(|_| ParseError::InvalidUtf8)?;
        let c = s.chars().next().ok_or(ParseError::InvalidUtf8)?;
        Ok((Key::Char(c).into(), expected_len))
    }
}

/// Decode SGR mouse button and event kind.
fn decode_sgr_button(cb: u8) -> (MouseButton, MouseEventKind) {
    let low = cb & 0b0000_0011;
    let motion = cb & 0b0010_0000 != 0;
    let scroll = cb & 0b0100_0000 != 0;

    let button = match low {
        0 => MouseButton::Left,
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => MouseButton::None,
    };

    if scroll {
        let kind = if low == 1 {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        (MouseButton::None, kind)
    } else if motion {
        (button, MouseEventKind::Move)
    } else {
        (button, MouseEventKind::Press)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(input: &[u8]) -> ParseResult {
        InputParser::new().parse(input)
    }

    #[test]
    fn test_sgr_press_and_release() {
        let (event, consumed) = parse_one(b"\x1b[<0;10;5M").unwrap();
        assert_eq!(consumed, 11);
        assert_eq!(event, Event::Mouse(MouseEvent::click(9, 4)));

        let (event, _) = parse_one(b"\x1b[<0;10;5m").unwrap();
        assert_eq!(
            event,
            Event::Mouse(MouseEvent::release(9, 4, MouseButton::Left))
        );
    }

    #[test]
    fn test_sgr_motion_without_button() {
        // 35 = motion flag (32) + "no button" (3)
        let (event, _) = parse_one(b"\x1b[<35;1;1M").unwrap();
        assert_eq!(event, Event::Mouse(MouseEvent::move_to(0, 0)));
    }

    #[test]
    fn test_sgr_scroll() {
        let (event, _) = parse_one(b"\x1b[<65;3;3M").unwrap();
        assert_eq!(event.mouse().unwrap().kind, MouseEventKind::ScrollDown);
    }

    #[test]
    fn test_sgr_malformed() {
        assert!(matches!(
            parse_one(b"\x1b[<0;10M"),
            Err(ParseError::UnrecognizedSequence(_))
        ));
        assert!(matches!(
            parse_one(b"\x1b[<999;1;1M"),
            Err(ParseError::UnrecognizedSequence(_))
        ));
        assert_eq!(parse_one(b"\x1b[<0;1"), Err(ParseError::Incomplete));
    }

    #[test]
    fn test_keys() {
        assert_eq!(parse_one(b"q").unwrap().0, Event::Key(Key::Char('q')));
        assert_eq!(parse_one(b"\x03").unwrap().0, Event::Key(Key::Ctrl('c')));
        assert_eq!(parse_one(b"\r").unwrap().0, Event::Key(Key::Enter));
        assert_eq!(parse_one(b"\x7f").unwrap().0, Event::Key(Key::Backspace));
        assert_eq!(parse_one("é".as_bytes()).unwrap(), (Key::Char('é').into(), 2));
    }

    #[test]
    fn test_escape_handling() {
        assert_eq!(parse_one(b"\x1b"), Err(ParseError::Incomplete));
        assert_eq!(parse_one(b"\x1b\x1b").unwrap(), (Key::Esc.into(), 1));
        assert_eq!(
            parse_one(b"\x1b[A"),
            Err(ParseError::UnrecognizedSequence(b"\x1b[A".to_vec()))
        );
    }

    #[test]
    fn test_parse_all_skips_unknown_and_keeps_tail() {
        let mut parser = InputParser::new();
        let input = b"\x1b[A\x1b[<0;2;2Mq\x1b[<0;3";
        let (events, consumed) = parser.parse_all(input);

        assert_eq!(
            events,
            vec![
                Event::Mouse(MouseEvent::click(1, 1)),
                Event::Key(Key::Char('q')),
            ]
        );
        assert_eq!(&input[consumed..], b"\x1b[<0;3");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_one(b""), Err(ParseError::Empty));
    }
}
