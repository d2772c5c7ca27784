//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use crate::color::Rgba;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// Write a u32 as decimal digits without going through `fmt`.
#[inline]
fn write_u32_decimal(w: &mut impl Write, n: u32) -> io::Result<()> {
    if n < 10 {
        return w.write_all(&[b'0' + n as u8]);
    }
    let mut buf = [0u8; 10];
    let mut i = buf.len();
    let mut n = n;
    while n > 0 {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    w.write_all(&buf[i..])
}

fn write_rgb(w: &mut impl Write, color: Rgba) -> io::Result<()> {
    let (r, g, b) = color.to_rgb_u8();
    write_u32_decimal(w, u32::from(r))?;
    w.write_all(b";")?;
    write_u32_decimal(w, u32::from(g))?;
    w.write_all(b";")?;
    write_u32_decimal(w, u32::from(b))
}

/// Write a true-color foreground SGR, or the default foreground when
/// the color is fully transparent.
pub fn write_fg_color(w: &mut impl Write, color: Rgba) -> io::Result<()> {
    if color.is_transparent() {
        return w.write_all(b"\x1b[39m");
    }
    w.write_all(b"\x1b[38;2;")?;
    write_rgb(w, color)?;
    w.write_all(b"m")
}

/// Write a true-color background SGR, or the default background when
/// the color is fully transparent.
pub fn write_bg_color(w: &mut impl Write, color: Rgba) -> io::Result<()> {
    if color.is_transparent() {
        return w.write_all(b"\x1b[49m");
    }
    w.write_all(b"\x1b[48;2;")?;
    write_rgb(w, color)?;
    w.write_all(b"m")
}

/// Write SGR codes switching the given attributes on.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    let mut codes = attrs.sgr_codes().peekable();
    if codes.peek().is_none() {
        return Ok(());
    }
    w.write_all(b"\x1b[")?;
    for (i, code) in codes.enumerate() {
        if i > 0 {
            w.write_all(b";")?;
        }
        w.write_all(code.as_bytes())?;
    }
    w.write_all(b"m")
}

/// Write an absolute cursor position (0-based row and column).
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, row + 1)?;
    w.write_all(b";")?;
    write_u32_decimal(w, col + 1)?;
    w.write_all(b"H")
}
