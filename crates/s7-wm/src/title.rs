//! Bounded window titles
//!
//! Titles are at most 255 bytes, the limit of a Pascal length-prefixed
//! string. Internally a `Str255` is a plain bounded byte string; the
//! length-prefixed layout only appears at the import/export boundary.

use core::fmt;

use crate::error::{WmError, WmResult};

const CAPACITY: usize = 255;

/// A byte string of at most 255 bytes.
///
/// Bytes past `len` are always zero, so the derived comparisons only see
/// the significant bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Str255 {
    len: u8,
    bytes: [u8; CAPACITY],
}

impl Str255 {
    pub const MAX_LEN: usize = CAPACITY;

    pub const fn empty() -> Self {
        Self {
            len: 0,
            bytes: [0; CAPACITY],
        }
    }

    /// Copy `bytes` in. Rejects anything longer than 255 bytes.
    pub fn new(bytes: &[u8]) -> WmResult<Self> {
        if bytes.len() > Self::MAX_LEN {
            return Err(WmError::TitleTooLong { len: bytes.len() });
        }
        Ok(Self::truncated(bytes))
    }

    /// Copy at most the first 255 bytes of `bytes`, dropping the rest.
    pub fn truncated(bytes: &[u8]) -> Self {
        let len = bytes.len().min(Self::MAX_LEN);
        let mut out = Self::empty();
        out.bytes[..len].copy_from_slice(&bytes[..len]);
        out.len = len as u8;
        out
    }

    /// Parse a length-prefixed string. An empty slice is an empty title.
    pub fn from_pascal(pascal: &[u8]) -> WmResult<Self> {
        let Some((&declared, rest)) = pascal.split_first() else {
            return Ok(Self::empty());
        };
        let declared = declared as usize;
        if declared > rest.len() {
            return Err(WmError::MalformedTitle {
                declared,
                available: rest.len(),
            });
        }
        Ok(Self::truncated(&rest[..declared]))
    }

    /// Length byte followed by the title bytes, zero padded.
    pub fn to_pascal(&self) -> [u8; 256] {
        let mut out = [0u8; 256];
        out[0] = self.len;
        out[1..=self.len()].copy_from_slice(self.as_bytes());
        out
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The title as UTF-8, `None` if it holds other bytes.
    pub fn to_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }
}

impl Default for Str255 {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<&[u8]> for Str255 {
    type Error = WmError;

    fn try_from(bytes: &[u8]) -> WmResult<Self> {
        Self::new(bytes)
    }
}

impl TryFrom<&str> for Str255 {
    type Error = WmError;

    fn try_from(s: &str) -> WmResult<Self> {
        Self::new(s.as_bytes())
    }
}

impl fmt::Debug for Str255 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Some(s) => write!(f, "Str255({:?})", s),
            None => write!(f, "Str255({:?})", self.as_bytes()),
        }
    }
}

impl fmt::Display for Str255 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn test_new_and_accessors() {
        let t = Str255::try_from("Macintosh HD").unwrap();
        assert_eq!(t.len(), 12);
        assert_eq!(t.as_bytes(), b"Macintosh HD");
        assert_eq!(t.to_str(), Some("Macintosh HD"));
        assert!(!t.is_empty());
        assert!(Str255::default().is_empty());
    }

    #[test]
    fn test_rejects_over_255() {
        let long = vec![b'x'; 256];
        assert_eq!(
            Str255::new(&long),
            Err(WmError::TitleTooLong { len: 256 })
        );
        assert_eq!(Str255::new(&long[..255]).unwrap().len(), 255);
    }

    #[test]
    fn test_truncated_keeps_prefix() {
        let mut long = vec![b'a'; 255];
        long.extend_from_slice(b"overflow");
        let t = Str255::truncated(&long);
        assert_eq!(t.len(), 255);
        assert!(t.as_bytes().iter().all(|&b| b == b'a'));
    }

    #[test]
    fn test_pascal_round_trip() {
        let t = Str255::try_from("Macintosh HD").unwrap();
        let p = t.to_pascal();
        assert_eq!(p[0], 12);
        assert_eq!(&p[1..13], b"Macintosh HD");
        assert!(p[13..].iter().all(|&b| b == 0));

        assert_eq!(Str255::from_pascal(&p).unwrap(), t);
    }

    #[test]
    fn test_from_pascal_ignores_trailing_bytes() {
        let t = Str255::from_pascal(b"\x03abcdef").unwrap();
        assert_eq!(t.as_bytes(), b"abc");
        assert!(Str255::from_pascal(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_from_pascal_rejects_short_input() {
        assert_eq!(
            Str255::from_pascal(b"\x0Aabc"),
            Err(WmError::MalformedTitle {
                declared: 10,
                available: 3
            })
        );
    }

    #[test]
    fn test_non_utf8_title() {
        let t = Str255::new(&[0x41, 0xA5, 0x42]).unwrap();
        assert_eq!(t.to_str(), None);
        assert_eq!(std::format!("{}", t), "A\u{FFFD}B");
    }
}
