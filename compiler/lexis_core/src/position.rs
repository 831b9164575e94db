//! Positions, sentinels, and cursors over scanned input.
//!
//! The engine never reads input itself. It only needs to compare a
//! position against the end sentinel and to measure how far a rule
//! advanced, so both capabilities are expressed as small traits that
//! any input representation can implement.
//!
//! # Provided Positions
//!
//! - `usize`: bare offsets, for rules that capture their input.
//! - [`ByteCursor`]: offset into a `&[u8]`, yields bytes.
//! - [`CharCursor`]: offset into a `&str`, yields `char`s and always sits
//!   on a UTF-8 boundary.
//!
//! Cursor distances are measured in bytes.

use std::fmt;

/// A location in the scanned input.
///
/// `distance(later)` must be the number of units between two positions
/// of the same origin, where `later` is not before `self`. The provided
/// positions panic when `later` precedes `self`.
pub trait Position: Copy + Eq + fmt::Debug {
    /// Number of units from `self` to `later`.
    fn distance(self, later: Self) -> usize;
}

/// End-of-input marker compared against positions.
///
/// The sentinel may be a different type than the position it bounds.
pub trait Sentinel<P> {
    /// Returns `true` once `pos` has reached the end of the input.
    fn is_end(&self, pos: P) -> bool;
}

/// Every position bounds a range by equality.
impl<P: Position> Sentinel<P> for P {
    #[inline]
    fn is_end(&self, pos: P) -> bool {
        pos == *self
    }
}

/// A position that can read the item under it.
pub trait Cursor: Position {
    /// The unit of input yielded by [`peek`](Cursor::peek).
    type Item: Copy;

    /// The item at this position, or `None` at the end of the buffer.
    fn peek(self) -> Option<Self::Item>;

    /// The position just past the current item.
    ///
    /// At the end of the buffer the cursor stays where it is.
    #[must_use]
    fn next(self) -> Self;
}

impl Position for usize {
    #[inline]
    fn distance(self, later: Self) -> usize {
        match later.checked_sub(self) {
            Some(distance) => distance,
            None => panic!("position {later} precedes {self}"),
        }
    }
}

/// Sentinel matching the end of a cursor's underlying buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Eof;

impl<C: Cursor> Sentinel<C> for Eof {
    #[inline]
    fn is_end(&self, pos: C) -> bool {
        pos.peek().is_none()
    }
}

/// Byte offset into a borrowed buffer.
///
/// Two cursors are equal when they point at the same offset of the same
/// buffer.
#[derive(Clone, Copy)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Cursor at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Cursor at `offset` into `buf`.
    ///
    /// # Panics
    /// Panics if `offset` is past the end of `buf`.
    pub fn at(buf: &'a [u8], offset: usize) -> Self {
        assert!(
            offset <= buf.len(),
            "offset {offset} out of bounds for buffer of {} bytes",
            buf.len()
        );
        Self { buf, pos: offset }
    }

    /// Cursor one past the last byte of this cursor's buffer.
    #[must_use]
    pub fn end(self) -> Self {
        Self {
            buf: self.buf,
            pos: self.buf.len(),
        }
    }

    /// Byte offset from the start of the buffer.
    #[inline]
    pub fn offset(self) -> usize {
        self.pos
    }

    /// Remaining bytes from this position to the end of the buffer.
    pub fn rest(self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Bytes between this cursor and `to`.
    pub fn slice_to(self, to: Self) -> &'a [u8] {
        &self.buf[self.pos..to.pos]
    }
}

impl PartialEq for ByteCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && std::ptr::eq(self.buf.as_ptr(), other.buf.as_ptr())
    }
}

impl Eq for ByteCursor<'_> {}

impl fmt::Debug for ByteCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteCursor({})", self.pos)
    }
}

impl<'a> From<&'a str> for ByteCursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl Position for ByteCursor<'_> {
    #[inline]
    fn distance(self, later: Self) -> usize {
        self.pos.distance(later.pos)
    }
}

impl Cursor for ByteCursor<'_> {
    type Item = u8;

    #[inline]
    fn peek(self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    #[inline]
    fn next(self) -> Self {
        Self {
            buf: self.buf,
            pos: (self.pos + 1).min(self.buf.len()),
        }
    }
}

/// Byte offset into a borrowed string, always on a `char` boundary.
#[derive(Clone, Copy)]
pub struct CharCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> CharCursor<'a> {
    /// Cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Cursor at byte `offset` into `text`.
    ///
    /// # Panics
    /// Panics if `offset` is out of bounds or not on a `char` boundary.
    pub fn at(text: &'a str, offset: usize) -> Self {
        assert!(
            text.is_char_boundary(offset),
            "offset {offset} is not a char boundary of a {}-byte string",
            text.len()
        );
        Self { text, pos: offset }
    }

    /// Cursor one past the last character of this cursor's text.
    #[must_use]
    pub fn end(self) -> Self {
        Self {
            text: self.text,
            pos: self.text.len(),
        }
    }

    /// Byte offset from the start of the text.
    #[inline]
    pub fn offset(self) -> usize {
        self.pos
    }

    /// Remaining text from this position.
    pub fn rest(self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Text between this cursor and `to`.
    pub fn slice_to(self, to: Self) -> &'a str {
        &self.text[self.pos..to.pos]
    }
}

impl PartialEq for CharCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && std::ptr::eq(self.text.as_ptr(), other.text.as_ptr())
    }
}

impl Eq for CharCursor<'_> {}

impl fmt::Debug for CharCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharCursor({})", self.pos)
    }
}

impl<'a> From<&'a str> for CharCursor<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl Position for CharCursor<'_> {
    #[inline]
    fn distance(self, later: Self) -> usize {
        self.pos.distance(later.pos)
    }
}

impl Cursor for CharCursor<'_> {
    type Item = char;

    #[inline]
    fn peek(self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn next(self) -> Self {
        match self.peek() {
            Some(c) => Self {
                text: self.text,
                pos: self.pos + c.len_utf8(),
            },
            None => self,
        }
    }
}
