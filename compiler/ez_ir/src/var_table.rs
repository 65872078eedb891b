//! Table of declared variables.
//!
//! Append-only. The position of a variable in the table is its memory slot,
//! which the interpreter uses directly as an address. Name lookup is O(1)
//! and returns the first declaration of a name.

use crate::Type;
use rustc_hash::FxHashMap;
use std::fmt;

/// Memory address of a declared variable.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct VarSlot(u32);

impl VarSlot {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        VarSlot(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VarSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A declared variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarInfo {
    pub name: String,
    /// Line of the declaration.
    pub line: u32,
    pub ty: Type,
    pub slot: VarSlot,
}

#[derive(Default, Debug)]
pub struct VarTable {
    vars: Vec<VarInfo>,
    first_by_name: FxHashMap<String, VarSlot>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable and return its slot.
    ///
    /// Duplicate names get their own slot, but [`lookup`](Self::lookup) keeps
    /// returning the first one.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` entries.
    pub fn declare(&mut self, name: &str, line: u32, ty: Type) -> VarSlot {
        let raw = u32::try_from(self.vars.len())
            .unwrap_or_else(|_| panic!("variable table exceeded {} entries", u32::MAX));
        let slot = VarSlot(raw);
        self.vars.push(VarInfo {
            name: name.to_owned(),
            line,
            ty,
            slot,
        });
        self.first_by_name.entry(name.to_owned()).or_insert(slot);
        slot
    }

    /// First declaration of `name`.
    pub fn lookup(&self, name: &str) -> Option<&VarInfo> {
        self.first_by_name
            .get(name)
            .and_then(|slot| self.vars.get(slot.index()))
    }

    pub fn get(&self, slot: VarSlot) -> Option<&VarInfo> {
        self.vars.get(slot.index())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VarInfo> {
        self.vars.iter()
    }
}

impl fmt::Display for VarTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------------------  Variables  ---------------------")?;
        for var in &self.vars {
            writeln!(
                f,
                "Entry {} -- name: {}, line: {}, type: {}",
                var.slot, var.name, var.line, var.ty
            )?;
        }
        writeln!(f, "-------------------------------------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slots_follow_declaration_order() {
        let mut vars = VarTable::new();
        assert_eq!(vars.declare("x", 1, Type::Int).raw(), 0);
        assert_eq!(vars.declare("y", 2, Type::Real).raw(), 1);
        assert_eq!(vars.len(), 2);

        let y = vars.lookup("y");
        assert_eq!(y.map(|v| (v.ty, v.slot.index())), Some((Type::Real, 1)));
        assert!(vars.lookup("z").is_none());
    }

    #[test]
    fn first_declaration_wins() {
        let mut vars = VarTable::new();
        vars.declare("x", 1, Type::Int);
        let second = vars.declare("x", 5, Type::Str);

        assert_eq!(second.index(), 1);
        let found = vars.lookup("x");
        assert_eq!(found.map(|v| (v.line, v.ty)), Some((1, Type::Int)));
        assert_eq!(vars.get(second).map(|v| v.ty), Some(Type::Str));
    }

    #[test]
    fn display_lists_entries() {
        let mut vars = VarTable::new();
        vars.declare("count", 3, Type::Int);
        vars.declare("name", 4, Type::Str);
        let expected = "\
---------------------  Variables  ---------------------
Entry 0 -- name: count, line: 3, type: int
Entry 1 -- name: name, line: 4, type: string
-------------------------------------------------------
";
        assert_eq!(vars.to_string(), expected);
    }
}
