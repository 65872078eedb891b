//! Diagnostic renderings of a tree.
//!
//! - [`TreeDump`]: one block per node, depth-first, listing id, kind, type,
//!   name, line, child count and payload.
//! - [`DotGraph`]: Graphviz `digraph` with one statement per node and edge.
//!
//! Both implement `Display`; call `to_string()` or write them anywhere.

use crate::{Node, NodeKind, Payload};
use std::fmt;

/// Block-per-node listing of a whole tree.
pub struct TreeDump<'a>(pub &'a Node);

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dump_node(self.0, f)
    }
}

fn dump_node(node: &Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "-----------  AST  -----------")?;
    writeln!(f, "ID: {}", node.id())?;
    writeln!(f, "Kind: {}", node.kind())?;
    writeln!(f, "Type: {}", node.ty())?;
    writeln!(f, "Name: {}", node.name().unwrap_or("(none)"))?;
    writeln!(f, "Line: {}", node.line())?;
    writeln!(f, "Children length: {}", node.len())?;
    write!(f, "Data: ")?;
    match payload_label(node) {
        Some(label) => writeln!(f, "{label}")?,
        None => writeln!(f, "No data")?,
    }
    writeln!(f, "-----------------------------")?;
    writeln!(f)?;
    for child in node.children() {
        dump_node(child, f)?;
    }
    Ok(())
}

/// Rendering of a literal or slot payload.
fn payload_label(node: &Node) -> Option<String> {
    match (node.kind(), node.payload()) {
        (NodeKind::BoolVal, Payload::Bool(b)) => Some(format!("{b} (bool)")),
        (NodeKind::IntVal, Payload::Int(i)) => Some(format!("{i} (int)")),
        (NodeKind::RealVal, Payload::Real(r)) => Some(format!("{r:.2} (real)")),
        (NodeKind::StrVal, Payload::Str(handle)) => Some(format!("{handle} (string)")),
        (NodeKind::VarDecl | NodeKind::VarUse, Payload::Slot(slot)) => Some(format!("slot {slot}")),
        _ => None,
    }
}

/// Graphviz rendering of a whole tree.
pub struct DotGraph<'a>(pub &'a Node);

impl fmt::Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "graph [ordering=\"out\"];")?;
        dot_node(self.0, f)?;
        writeln!(f, "}}")
    }
}

fn dot_node(node: &Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = node.name().unwrap_or_default();
    write!(f, "node{}[label=\"", node.id())?;
    match node.kind() {
        NodeKind::VarDecl => write!(f, "{} {name}", node.ty())?,
        NodeKind::VarUse => write!(f, "{name} ({})", node.ty())?,
        _ => match payload_label(node) {
            Some(label) => f.write_str(&label)?,
            None => f.write_str(node.kind().label())?,
        },
    }
    writeln!(f, "\"];")?;

    for child in node.children() {
        dot_node(child, f)?;
        writeln!(f, "node{} -> node{};", node.id(), child.id())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
