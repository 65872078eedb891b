//! Value types and binary operators.
//!
//! Both enums are closed and carry no state. `Type` is what the checker
//! annotates nodes with; `Operator` only selects a resolution table.

use std::fmt;
use std::str::FromStr;

/// Static type of an AST node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    #[cfg_attr(feature = "serde", serde(rename = "bool"))]
    Bool,
    #[cfg_attr(feature = "serde", serde(rename = "int"))]
    Int,
    #[cfg_attr(feature = "serde", serde(rename = "real"))]
    Real,
    #[cfg_attr(feature = "serde", serde(rename = "string"))]
    Str,
    /// Nodes without a value (statement lists, declarations, ...).
    #[cfg_attr(feature = "serde", serde(rename = "no_type"))]
    NoType,
    /// No valid operation exists. Propagates upward, never coerced.
    #[cfg_attr(feature = "serde", serde(rename = "error"))]
    Error,
}

impl Type {
    /// The four types that index the resolution tables.
    pub const VALUE_TYPES: [Type; 4] = [Type::Bool, Type::Int, Type::Real, Type::Str];

    /// Row/column of this type in a resolution table.
    ///
    /// `None` for `NoType` and `Error`, which never index a table.
    #[inline]
    pub const fn table_index(self) -> Option<usize> {
        match self {
            Type::Bool => Some(0),
            Type::Int => Some(1),
            Type::Real => Some(2),
            Type::Str => Some(3),
            Type::NoType | Type::Error => None,
        }
    }

    /// Whether values of this type exist at runtime.
    #[inline]
    pub const fn is_value(self) -> bool {
        self.table_index().is_some()
    }

    /// Display name, as used in diagnostics and dumps.
    pub const fn as_str(self) -> &'static str {
        match self {
            Type::Bool => "bool",
            Type::Int => "int",
            Type::Real => "real",
            Type::Str => "string",
            Type::NoType => "no_type",
            Type::Error => "err_type",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown type name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("type '{0}' does not exist")]
pub struct UnknownType(pub String);

impl FromStr for Type {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(Type::Bool),
            "int" => Ok(Type::Int),
            "real" => Ok(Type::Real),
            "string" | "str" => Ok(Type::Str),
            _ => Err(UnknownType(s.to_owned())),
        }
    }
}

/// Binary operator tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operator {
    Assign,
    LessThan,
    Equal,
    Plus,
    Minus,
    Times,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 7] = [
        Operator::Assign,
        Operator::LessThan,
        Operator::Equal,
        Operator::Plus,
        Operator::Minus,
        Operator::Times,
        Operator::Divide,
    ];

    /// Source-level spelling.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Assign => ":=",
            Operator::LessThan => "<",
            Operator::Equal => "=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
