//! The AST node.

use super::kind::{Coercion, NodeKind};
use crate::{AstError, StrHandle, Type, VarSlot};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Source of node ids. Starts at 1; ids are never reused within a process.
static NEXT_NODE_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a node, assigned at construction.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    fn fresh() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data carried by a node.
///
/// Literals carry their value, declarations and variable uses carry their
/// memory slot once the checker has bound them.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub enum Payload {
    #[default]
    None,
    Bool(bool),
    Int(i32),
    Real(f32),
    Str(StrHandle),
    Slot(VarSlot),
}

/// A node of the typed AST.
///
/// A node owns its children; the tree is never shared and dropping the root
/// frees everything below it.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    name: Option<String>,
    line: u32,
    ty: Type,
    payload: Payload,
    children: Vec<Node>,
}

impl Node {
    /// Create a node with no children.
    pub fn new(kind: NodeKind, name: Option<&str>, line: u32, ty: Type, payload: Payload) -> Self {
        Node {
            id: NodeId::fresh(),
            kind,
            name: name.map(str::to_owned),
            line,
            ty,
            payload,
            children: Vec::new(),
        }
    }

    /// Create a node and append `children` in order.
    pub fn with_children(
        kind: NodeKind,
        line: u32,
        ty: Type,
        children: impl IntoIterator<Item = Node>,
    ) -> Self {
        let mut node = Node::new(kind, None, line, ty, Payload::None);
        node.children.extend(children);
        node
    }

    // Accessors

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn payload(&self) -> Payload {
        self.payload
    }

    /// Number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to all children, for passes that rewrite in place.
    #[inline]
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Child at `index`.
    pub fn child(&self, index: usize) -> Result<&Node, AstError> {
        let len = self.children.len();
        self.children
            .get(index)
            .ok_or_else(|| self.out_of_bounds(index, len))
    }

    /// Mutable child at `index`.
    pub fn child_mut(&mut self, index: usize) -> Result<&mut Node, AstError> {
        let len = self.children.len();
        let err = self.out_of_bounds(index, len);
        self.children.get_mut(index).ok_or(err)
    }

    /// Fail unless the number of children lies in `min..=max`.
    pub fn check_arity(&self, min: usize, max: usize) -> Result<(), AstError> {
        let found = self.children.len();
        if (min..=max).contains(&found) {
            return Ok(());
        }
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{min} to {max}")
        };
        Err(AstError::WrongArity {
            kind: self.kind,
            line: self.line,
            expected,
            found,
        })
    }

    /// Name of a node that must have one (declarations, variable uses).
    pub fn required_name(&self) -> Result<&str, AstError> {
        self.name().ok_or(AstError::MissingName {
            kind: self.kind,
            line: self.line,
        })
    }

    /// Memory slot of a bound variable use or declaration.
    pub fn slot(&self) -> Result<VarSlot, AstError> {
        match self.payload {
            Payload::Slot(slot) => Ok(slot),
            _ => Err(AstError::UnboundVariable {
                name: self.name().unwrap_or_default().to_owned(),
                line: self.line,
            }),
        }
    }

    // Mutators

    /// Append a child.
    pub fn add_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Replace the child at `index`, returning the one it displaced.
    pub fn set_child(&mut self, index: usize, child: Node) -> Result<Node, AstError> {
        let slot = self.child_mut(index)?;
        Ok(std::mem::replace(slot, child))
    }

    /// Wrap the child at `index` in a new coercion node.
    ///
    /// The coercion node takes the operand's line and the coercion's target
    /// type; the operand becomes its only child.
    pub fn wrap_child(&mut self, index: usize, coercion: Coercion) -> Result<(), AstError> {
        let line = self.child(index)?.line;
        let wrapper = Node::new(
            NodeKind::Coerce(coercion),
            None,
            line,
            coercion.target(),
            Payload::None,
        );
        let operand = self.set_child(index, wrapper)?;
        self.child_mut(index)?.add_child(operand);
        Ok(())
    }

    pub fn set_type(&mut self, ty: Type) -> &mut Self {
        self.ty = ty;
        self
    }

    /// Set the name unless one is already set; a second call is a no-op.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        if self.name.is_none() {
            self.name = Some(name.to_owned());
        }
        self
    }

    pub fn set_payload(&mut self, payload: Payload) -> &mut Self {
        self.payload = payload;
        self
    }

    fn out_of_bounds(&self, index: usize, len: usize) -> AstError {
        AstError::ChildOutOfBounds {
            kind: self.kind,
            line: self.line,
            index,
            len,
        }
    }
}

/// Tears the tree down with an explicit worklist so that dropping a deeply
/// nested tree does not recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
