//! Binary operator resolution tables.
//!
//! One 4x4 table per operator family, indexed by `[left][right]` type in
//! the order `bool, int, real, string`. An entry gives the result type and
//! at most one coercion per side. Lookup is a direct array index.
//!
//! | family     | operators          | rule |
//! |------------|--------------------|------|
//! | additive   | `+`                | widen along bool < int < real; string absorbs everything |
//! | arithmetic | `-` `*` `/`        | int/real only, narrower side widened |
//! | relational | `<` `=`            | bool~bool, int/real~int/real, string~string; result bool |
//! | assignment | `:=`               | left never coerced; only int -> real on the right |

use ez_ir::{Coercion, Operator, Type};
use Coercion::{BoolToInt, BoolToReal, BoolToStr, IntToReal, IntToStr, RealToStr};
use Type::{Bool, Int, Real, Str};

/// Outcome of resolving one operator application.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Unification {
    /// Result type of the operator node; `Type::Error` when invalid.
    pub ty: Type,
    /// Coercion to wrap around the left operand.
    pub left: Option<Coercion>,
    /// Coercion to wrap around the right operand.
    pub right: Option<Coercion>,
}

impl Unification {
    pub const ERROR: Unification = Unification {
        ty: Type::Error,
        left: None,
        right: None,
    };

    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self.ty, Type::Error)
    }
}

const fn same(ty: Type) -> Unification {
    Unification {
        ty,
        left: None,
        right: None,
    }
}

const fn widen_left(ty: Type, c: Coercion) -> Unification {
    Unification {
        ty,
        left: Some(c),
        right: None,
    }
}

const fn widen_right(ty: Type, c: Coercion) -> Unification {
    Unification {
        ty,
        left: None,
        right: Some(c),
    }
}

const ERR: Unification = Unification::ERROR;

type Table = [[Unification; 4]; 4];

// +
const ADDITIVE: Table = [
    [
        same(Bool),
        widen_left(Int, BoolToInt),
        widen_left(Real, BoolToReal),
        widen_left(Str, BoolToStr),
    ],
    [
        widen_right(Int, BoolToInt),
        same(Int),
        widen_left(Real, IntToReal),
        widen_left(Str, IntToStr),
    ],
    [
        widen_right(Real, BoolToReal),
        widen_right(Real, IntToReal),
        same(Real),
        widen_left(Str, RealToStr),
    ],
    [
        widen_right(Str, BoolToStr),
        widen_right(Str, IntToStr),
        widen_right(Str, RealToStr),
        same(Str),
    ],
];

// - * /
const ARITHMETIC: Table = [
    [ERR, ERR, ERR, ERR],
    [ERR, same(Int), widen_left(Real, IntToReal), ERR],
    [ERR, widen_right(Real, IntToReal), same(Real), ERR],
    [ERR, ERR, ERR, ERR],
];

// < =
const RELATIONAL: Table = [
    [same(Bool), ERR, ERR, ERR],
    [ERR, same(Bool), widen_left(Bool, IntToReal), ERR],
    [ERR, widen_right(Bool, IntToReal), same(Bool), ERR],
    [ERR, ERR, ERR, same(Bool)],
];

// :=
const ASSIGNMENT: Table = [
    [same(Bool), ERR, ERR, ERR],
    [ERR, same(Int), ERR, ERR],
    [ERR, widen_right(Real, IntToReal), same(Real), ERR],
    [ERR, ERR, ERR, same(Str)],
];

/// Resolve `left op right`.
///
/// `NoType` and `Error` operands resolve to [`Unification::ERROR`], so an
/// error anywhere below an operator propagates up through it.
pub fn unify(op: Operator, left: Type, right: Type) -> Unification {
    let (Some(l), Some(r)) = (left.table_index(), right.table_index()) else {
        return Unification::ERROR;
    };
    let table = match op {
        Operator::Plus => &ADDITIVE,
        Operator::Minus | Operator::Times | Operator::Divide => &ARITHMETIC,
        Operator::LessThan | Operator::Equal => &RELATIONAL,
        Operator::Assign => &ASSIGNMENT,
    };
    table[l][r]
}

#[cfg(test)]
mod tests;
