//! String table for literal and runtime string values.
//!
//! Strings are stored once and referred to by a [`StrHandle`], which is just
//! the entry's position in the table. The table is append-only: a handle stays
//! valid, and keeps resolving to the same content, for the table's lifetime.
//!
//! Interning identical content twice returns the same handle. Callers must
//! not rely on that (compare content, not handles, when equality matters).

use rustc_hash::FxHashMap;
use std::fmt;

/// Handle to an entry in a [`StringTable`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct StrHandle(u32);

impl StrHandle {
    /// Create from a raw table index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        StrHandle(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Table index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StrHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Append-only table of owned strings.
#[derive(Default)]
pub struct StringTable {
    /// Entries in insertion order; a handle indexes this.
    strings: Vec<Box<str>>,
    /// Content to handle, for deduplicated insertion.
    map: FxHashMap<Box<str>, StrHandle>,
}

impl StringTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `s` and return its handle.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` entries.
    pub fn intern(&mut self, s: &str) -> StrHandle {
        if let Some(&handle) = self.map.get(s) {
            return handle;
        }
        let raw = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("string table exceeded {} entries", u32::MAX));
        let handle = StrHandle(raw);
        self.strings.push(s.into());
        self.map.insert(s.into(), handle);
        handle
    }

    /// Store an owned string, reusing its buffer for the entry.
    pub fn intern_owned(&mut self, s: String) -> StrHandle {
        if let Some(&handle) = self.map.get(s.as_str()) {
            return handle;
        }
        let raw = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("string table exceeded {} entries", u32::MAX));
        let handle = StrHandle(raw);
        let entry = s.into_boxed_str();
        self.map.insert(entry.clone(), handle);
        self.strings.push(entry);
        handle
    }

    /// Content of `handle`, or `None` if no such entry exists.
    pub fn get(&self, handle: StrHandle) -> Option<&str> {
        self.strings.get(handle.index()).map(AsRef::as_ref)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over `(handle, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StrHandle, &str)> {
        self.strings.iter().enumerate().map(|(i, s)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "intern() caps the table at u32::MAX entries"
            )]
            let raw = i as u32;
            (StrHandle(raw), s.as_ref())
        })
    }
}

impl fmt::Display for StringTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------  Strings  -------------------")?;
        for (handle, s) in self.iter() {
            writeln!(f, "Entry {} -- {s}", handle.raw())?;
        }
        writeln!(f, "-------------------------------------------------")
    }
}

impl fmt::Debug for StringTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.strings.iter()).finish()
    }
}
