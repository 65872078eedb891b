use super::*;
use crate::{Operator, StrHandle, Type};
use pretty_assertions::assert_eq;

#[test]
fn dump_lists_every_node_depth_first() {
    let lhs = Node::real_val(2.5, 3);
    let rhs = Node::str_val(StrHandle::from_raw(4), 3);
    let (lhs_id, rhs_id) = (lhs.id(), rhs.id());
    let mut plus = Node::binary(Operator::Plus, 3, lhs, rhs);
    plus.set_type(Type::Str);
    let plus_id = plus.id();

    let expected = format!(
        "\
-----------  AST  -----------
ID: {plus_id}
Kind: +
Type: string
Name: (none)
Line: 3
Children length: 2
Data: No data
-----------------------------

-----------  AST  -----------
ID: {lhs_id}
Kind: real_val
Type: real
Name: (none)
Line: 3
Children length: 0
Data: 2.50 (real)
-----------------------------

-----------  AST  -----------
ID: {rhs_id}
Kind: str_val
Type: string
Name: (none)
Line: 3
Children length: 0
Data: @4 (string)
-----------------------------

"
    );
    assert_eq!(TreeDump(&plus).to_string(), expected);
}

#[test]
fn dot_emits_nodes_then_edges() {
    let target = Node::var_use("x", 2);
    let value = Node::bool_val(true, 2);
    let (target_id, value_id) = (target.id(), value.id());
    let assign = Node::assign(2, target, value);
    let assign_id = assign.id();

    let expected = format!(
        "\
digraph {{
graph [ordering=\"out\"];
node{assign_id}[label=\":=\"];
node{target_id}[label=\"x (no_type)\"];
node{assign_id} -> node{target_id};
node{value_id}[label=\"true (bool)\"];
node{assign_id} -> node{value_id};
}}
"
    );
    assert_eq!(DotGraph(&assign).to_string(), expected);
}

#[test]
fn dot_labels_declarations_with_type_and_name() {
    let decl = Node::var_decl("total", Type::Int, 1);
    let id = decl.id();
    let rendered = DotGraph(&decl).to_string();
    assert!(rendered.contains(&format!("node{id}[label=\"int total\"];")));
}
