//! Window geometry values in the X11 `WxH+X+Y` notation.
//!
//! ```text
//! [-][=][<width>][{xX}<height>][{+-}<xoffset>{+-}<yoffset>]
//! ```
//!
//! A leading `-` (before the optional `=`) marks the width as relative to the
//! screen width.  A `-` offset is measured from the right/bottom edge and is
//! recorded in `negative_x` / `negative_y`.

use serde::Serialize;

/// A parsed geometry specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    pub width_set: bool,
    pub height_set: bool,
    pub negative_width: bool,
    pub negative_x: bool,
    pub negative_y: bool,
}

impl Geometry {
    /// Parses a geometry string.
    ///
    /// Returns `None` when the string has trailing garbage, an offset without
    /// digits, or an x offset without the matching y offset.  An empty string
    /// is valid and sets nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg_core::domain::Geometry;
    ///
    /// let g = Geometry::parse("300x5-30+20").unwrap();
    /// assert_eq!((g.width, g.height, g.x, g.y), (300, 5, -30, 20));
    /// assert!(g.negative_x && !g.negative_y);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let mut geometry = Geometry::default();
        let mut rest = raw;

        if let Some(stripped) = rest.strip_prefix('-') {
            geometry.negative_width = true;
            rest = stripped;
        }
        rest = rest.strip_prefix('=').unwrap_or(rest);

        if !rest.starts_with(['+', '-', 'x', 'X']) && !rest.is_empty() {
            let (width, tail) = read_unsigned(rest)?;
            geometry.width = width;
            geometry.width_set = true;
            rest = tail;
        }

        if let Some(tail) = rest.strip_prefix(['x', 'X']) {
            let (height, tail) = read_unsigned(tail)?;
            geometry.height = height;
            geometry.height_set = true;
            rest = tail;
        }

        if rest.starts_with(['+', '-']) {
            let (x, negative_x, tail) = read_offset(rest)?;
            let (y, negative_y, tail) = read_offset(tail)?;
            geometry.x = x;
            geometry.y = y;
            geometry.negative_x = negative_x;
            geometry.negative_y = negative_y;
            rest = tail;
        }

        rest.is_empty().then_some(geometry)
    }
}

fn read_unsigned(s: &str) -> Option<(u32, &str)> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value = s[..len].parse().ok()?;
    Some((value, &s[len..]))
}

/// Reads `{+-}<digits>`; the flag reports a `-` sign.
fn read_offset(s: &str) -> Option<(i32, bool, &str)> {
    let negative = match s.as_bytes().first()? {
        b'+' => false,
        b'-' => true,
        _ => return None,
    };
    let (magnitude, tail) = read_unsigned(&s[1..])?;
    let magnitude = i32::try_from(magnitude).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    Some((value, negative, tail))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
