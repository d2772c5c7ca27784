//! Input handling for keyboard and mouse events.

mod event;
mod mouse;
mod parser;

pub use event::{Event, Key};
pub use mouse::{MouseButton, MouseEvent, MouseEventKind};
pub use parser::{InputParser, ParseError, ParseResult};
