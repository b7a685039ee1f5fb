//! Raise-site location: the `(file, line)` pair stamped onto an error.
//!
//! A `Site` is a small `Copy` value with an in-object file-name buffer —
//! no heap allocation happens on the error path when a site is stamped.
//!
//! # Storage
//!
//! ```text
//! ┌──────────────────────────────┬──────────┬────────┐
//! │  file: [u8; 256]             │ file_len │  line  │
//! │  bounded, truncating copy    │   u8     │  u32   │
//! └──────────────────────────────┴──────────┴────────┘
//! ```
//!
//! | State     | `file()` | `line()` |
//! |-----------|----------|----------|
//! | unstamped | `""`     | `0`      |
//! | stamped   | filename | `>= 1`   |

/// Capacity of the in-object file-name buffer, in bytes.
///
/// At most `FILE_CAPACITY - 1` bytes of the file name are stored; a longer
/// name is truncated, never rejected. File names come from `file!()` (the
/// library's own sources), so truncation is a lossy edge case, not a failure.
pub const FILE_CAPACITY: usize = 256;

/// Source location stamped onto an error at its raise site.
///
/// `file` and `line` are either both unset (the error was never stamped)
/// or both set — [`Site::set`] always writes the pair together.
///
/// ```
/// use serror::Site;
///
/// let mut site = Site::UNSET;
/// assert!(!site.is_set());
///
/// site.set("parser.rs", 42);
/// assert_eq!(site.file(), "parser.rs");
/// assert_eq!(site.line(), 42);
/// ```
#[derive(Copy, Clone)]
pub struct Site {
    file: [u8; FILE_CAPACITY],
    file_len: u8,
    line: u32,
}

impl Site {
    /// No location stamped.
    pub const UNSET: Site = Site {
        file: [0; FILE_CAPACITY],
        file_len: 0,
        line: 0,
    };

    /// Stamp a location. Overwrites any previous stamp — last stamp wins,
    /// so an error caught and re-raised by an outer layer reports the
    /// outer raise site.
    ///
    /// `file` is copied into the bounded buffer; anything beyond
    /// `FILE_CAPACITY - 1` bytes is dropped, backing off to a UTF-8
    /// character boundary so [`Site::file`] always returns a valid `&str`.
    pub fn set(&mut self, file: &str, line: u32) {
        let mut len = file.len().min(FILE_CAPACITY - 1);
        while !file.is_char_boundary(len) {
            len -= 1;
        }
        self.file[..len].copy_from_slice(&file.as_bytes()[..len]);
        self.file_len = len as u8;
        self.line = line;
    }

    /// The stamped file name, or `""` if unstamped.
    #[inline]
    pub fn file(&self) -> &str {
        // The buffer prefix is always a char-boundary slice of a &str.
        core::str::from_utf8(&self.file[..self.file_len as usize]).unwrap_or("")
    }

    /// The stamped line number, or `0` if unstamped.
    /// Line numbers from `line!()` are 1-based, so `0` never collides.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// True once a location has been stamped.
    #[inline]
    pub const fn is_set(&self) -> bool {
        self.line != 0 || self.file_len != 0
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::UNSET
    }
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        // Compare the visible pair; stale buffer bytes past file_len
        // (left over from a longer earlier stamp) must not count.
        self.line == other.line && self.file() == other.file()
    }
}

impl Eq for Site {}

impl core::fmt::Display for Site {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_set() {
            write!(f, "{}:{}", self.file(), self.line)
        } else {
            write!(f, "<unstamped>")
        }
    }
}

impl core::fmt::Debug for Site {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Site")
            .field("file", &self.file())
            .field("line", &self.line)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_defaults() {
        let site = Site::default();
        assert!(!site.is_set());
        assert_eq!(site.file(), "");
        assert_eq!(site.line(), 0);
        assert_eq!(site, Site::UNSET);
    }

    #[test]
    fn set_round_trip() {
        let mut site = Site::UNSET;
        site.set("parser.rs", 42);
        assert!(site.is_set());
        assert_eq!(site.file(), "parser.rs");
        assert_eq!(site.line(), 42);
    }

    #[test]
    fn last_stamp_wins() {
        let mut site = Site::UNSET;
        site.set("first.rs", 10);
        site.set("second.rs", 20);
        assert_eq!(site.file(), "second.rs");
        assert_eq!(site.line(), 20);
    }

    #[test]
    fn restamp_shorter_name_hides_stale_bytes() {
        let mut site = Site::UNSET;
        site.set("a_rather_long_module_name.rs", 1);
        site.set("x.rs", 2);
        assert_eq!(site.file(), "x.rs");

        let mut other = Site::UNSET;
        other.set("x.rs", 2);
        assert_eq!(site, other, "stale buffer bytes must not affect equality");
    }

    #[test]
    fn truncates_at_capacity_minus_one() {
        let long = "a".repeat(FILE_CAPACITY + 50);
        let mut site = Site::UNSET;
        site.set(&long, 7);
        assert_eq!(site.file().len(), FILE_CAPACITY - 1);
        assert_eq!(site.file(), &long[..FILE_CAPACITY - 1]);
        assert_eq!(site.line(), 7);
    }

    #[test]
    fn exact_capacity_boundary() {
        // len == FILE_CAPACITY loses exactly one byte
        let name = "b".repeat(FILE_CAPACITY);
        let mut site = Site::UNSET;
        site.set(&name, 1);
        assert_eq!(site.file().len(), FILE_CAPACITY - 1);

        // len == FILE_CAPACITY - 1 fits untouched
        let name = "c".repeat(FILE_CAPACITY - 1);
        site.set(&name, 2);
        assert_eq!(site.file(), name);
    }

    #[test]
    fn truncation_backs_off_to_char_boundary() {
        // 254 ASCII bytes then 'é' (2 bytes): the naive 255-byte cut lands
        // mid-character, so the copy must back off to 254.
        let mut name = "d".repeat(FILE_CAPACITY - 2);
        name.push('é');
        assert_eq!(name.len(), FILE_CAPACITY);
        let mut site = Site::UNSET;
        site.set(&name, 3);
        assert_eq!(site.file().len(), FILE_CAPACITY - 2);
        assert_eq!(site.file(), &name[..FILE_CAPACITY - 2]);
    }

    #[test]
    fn display_format() {
        let mut site = Site::UNSET;
        assert_eq!(format!("{}", site), "<unstamped>");
        site.set("lib.rs", 9);
        assert_eq!(format!("{}", site), "lib.rs:9");
    }

    #[test]
    fn copy_semantics() {
        let mut a = Site::UNSET;
        a.set("a.rs", 1);
        let b = a; // Copy
        assert_eq!(a, b);
    }
}
