use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Width rank along the numeric widening lattice.
fn rank(ty: Type) -> Option<u8> {
    match ty {
        Type::Bool => Some(0),
        Type::Int => Some(1),
        Type::Real => Some(2),
        _ => None,
    }
}

fn coercion(from: Type, to: Type) -> Option<Coercion> {
    Coercion::ALL
        .into_iter()
        .find(|c| c.source() == from && c.target() == to)
}

/// Rule-based expectation, stated per operator family rather than as a table.
fn expected(op: Operator, l: Type, r: Type) -> Unification {
    let widen = |ty: Type| Unification {
        ty,
        left: if l == ty { None } else { coercion(l, ty) },
        right: if r == ty { None } else { coercion(r, ty) },
    };
    match op {
        Operator::Plus => {
            if l == Type::Str || r == Type::Str {
                widen(Type::Str)
            } else if rank(l) >= rank(r) {
                widen(l)
            } else {
                widen(r)
            }
        }
        Operator::Minus | Operator::Times | Operator::Divide => match (l, r) {
            (Type::Int, Type::Int) => widen(Type::Int),
            (Type::Int | Type::Real, Type::Int | Type::Real) => widen(Type::Real),
            _ => Unification::ERROR,
        },
        Operator::LessThan | Operator::Equal => {
            let numeric = |t| matches!(t, Type::Int | Type::Real);
            if numeric(l) && numeric(r) {
                let operands = widen(if l == r { l } else { Type::Real });
                Unification {
                    ty: Type::Bool,
                    ..operands
                }
            } else if l == r {
                Unification {
                    ty: Type::Bool,
                    left: None,
                    right: None,
                }
            } else {
                Unification::ERROR
            }
        }
        Operator::Assign => match (l, r) {
            _ if l == r => widen(l),
            (Type::Real, Type::Int) => widen(Type::Real),
            _ => Unification::ERROR,
        },
    }
}

#[test]
fn every_table_entry_matches_family_rules() {
    let mut checked = 0;
    for op in Operator::ALL {
        for l in Type::VALUE_TYPES {
            for r in Type::VALUE_TYPES {
                assert_eq!(unify(op, l, r), expected(op, l, r), "{l} {op} {r}");
                checked += 1;
            }
        }
    }
    assert_eq!(checked, 7 * 4 * 4);
}

#[test]
fn spot_checks() {
    assert_eq!(
        unify(Operator::Plus, Type::Int, Type::Real),
        Unification {
            ty: Type::Real,
            left: Some(Coercion::IntToReal),
            right: None,
        }
    );
    assert_eq!(
        unify(Operator::Plus, Type::Str, Type::Bool),
        Unification {
            ty: Type::Str,
            left: None,
            right: Some(Coercion::BoolToStr),
        }
    );
    assert_eq!(
        unify(Operator::LessThan, Type::Int, Type::Real),
        Unification {
            ty: Type::Bool,
            left: Some(Coercion::IntToReal),
            right: None,
        }
    );
    assert!(unify(Operator::Minus, Type::Bool, Type::Int).is_error());
    assert!(unify(Operator::Times, Type::Str, Type::Str).is_error());
    assert!(unify(Operator::Equal, Type::Bool, Type::Int).is_error());
    assert!(unify(Operator::Assign, Type::Int, Type::Real).is_error());
    assert_eq!(
        unify(Operator::Assign, Type::Real, Type::Int).right,
        Some(Coercion::IntToReal)
    );
}

#[test]
fn assignment_never_coerces_left() {
    for l in Type::VALUE_TYPES {
        for r in Type::VALUE_TYPES {
            assert_eq!(unify(Operator::Assign, l, r).left, None);
        }
    }
}

#[test]
fn non_value_operands_are_errors() {
    for op in Operator::ALL {
        for other in Type::VALUE_TYPES {
            for bad in [Type::NoType, Type::Error] {
                assert!(unify(op, bad, other).is_error());
                assert!(unify(op, other, bad).is_error());
            }
        }
        assert!(unify(op, Type::Error, Type::Error).is_error());
    }
}

#[test]
fn valid_entries_coerce_to_result_operand_type() {
    for op in Operator::ALL {
        for l in Type::VALUE_TYPES {
            for r in Type::VALUE_TYPES {
                let u = unify(op, l, r);
                if u.is_error() {
                    continue;
                }
                let left = u.left.map_or(l, Coercion::target);
                let right = u.right.map_or(r, Coercion::target);
                assert_eq!(left, right, "{l} {op} {r} leaves operands unequal");
                assert!(u.left.is_none() || u.right.is_none());
            }
        }
    }
}

fn any_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn any_type() -> impl Strategy<Value = Type> {
    prop::sample::select(vec![
        Type::Bool,
        Type::Int,
        Type::Real,
        Type::Str,
        Type::NoType,
        Type::Error,
    ])
}

proptest! {
    #[test]
    fn unify_is_deterministic(op in any_operator(), l in any_type(), r in any_type()) {
        prop_assert_eq!(unify(op, l, r), unify(op, l, r));
    }

    #[test]
    fn error_propagates_through_any_operator(op in any_operator(), ty in any_type()) {
        prop_assert!(unify(op, Type::Error, ty).is_error());
        prop_assert!(unify(op, ty, Type::Error).is_error());
    }
}
