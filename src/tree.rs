use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::value::Value;

/// A tree of [`Value`]-labeled nodes, optionally annotated with metadata.
///
/// `Tree` is a cheap-to-clone handle: cloning it yields another handle to the
/// same node, and every node of a tree is reachable through such handles.
/// The handle returned by [`new`](Self::new) or [`with_root`](Self::with_root)
/// addresses the root; [`add_branch`](Self::add_branch) returns a handle to
/// the freshly appended child so deeper levels can be filled in.
///
/// Children keep their insertion order and are append-only.
/// Each node owns its children, while the upward link is weak, so dropping
/// the last handle to the root drops the whole tree.
///
/// # Example
///
/// ```
/// # use text_tree::Tree;
/// let tree = Tree::new();
/// tree.add_leaf("Dockerfile").add_leaf("Makefile");
/// let bin = tree.add_branch("bin");
/// bin.add_leaf("dbmaker").add_leaf("someserver");
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    inner: Rc<RefCell<NodeData>>,
}

#[derive(Debug)]
struct NodeData {
    value: Value,
    meta: Option<Value>,
    parent: Weak<RefCell<NodeData>>,
    children: Vec<Tree>,
}

impl Tree {
    /// Create a tree whose root displays as a single dot.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(".")
    }

    /// Create a tree with the given root value.
    #[must_use]
    pub fn with_root(value: impl Into<Value>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NodeData {
                value: value.into(),
                meta: None,
                parent: Weak::new(),
                children: Vec::new(),
            })),
        }
    }

    fn append_child(&self, meta: Option<Value>, value: Value) -> Self {
        let child = Self {
            inner: Rc::new(RefCell::new(NodeData {
                value,
                meta,
                parent: Rc::downgrade(&self.inner),
                children: Vec::new(),
            })),
        };
        self.inner.borrow_mut().children.push(child.clone());
        child
    }

    /// Append a child without metadata.
    ///
    /// Returns `self`, so further siblings can be chained:
    ///
    /// ```
    /// # use text_tree::Tree;
    /// let tree = Tree::new();
    /// tree.add_leaf("hello").add_leaf("world");
    /// ```
    pub fn add_leaf(&self, value: impl Into<Value>) -> &Self {
        self.append_child(None, value.into());
        self
    }

    /// Append a child with metadata. Returns `self` for sibling chaining.
    pub fn add_leaf_with_meta(&self, meta: impl Into<Value>, value: impl Into<Value>) -> &Self {
        self.append_child(Some(meta.into()), value.into());
        self
    }

    /// Append a child and return a handle to it, one level deeper.
    #[must_use]
    pub fn add_branch(&self, value: impl Into<Value>) -> Self {
        self.append_child(None, value.into())
    }

    /// Append a child with metadata and return a handle to it.
    #[must_use]
    pub fn add_branch_with_meta(&self, meta: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.append_child(Some(meta.into()), value.into())
    }

    /// Sever the upward link, turning this node into a standalone root
    /// usable as an independent subtree handle.
    ///
    /// Only the upward link is cleared: the node stays in its former
    /// parent's child list, so it still shows up when the parent is rendered
    /// or visited, while no longer reporting a parent itself.
    /// Has no effect on a node that already has no parent.
    pub fn detach(&self) -> &Self {
        self.inner.borrow_mut().parent = Weak::new();
        self
    }

    /// The node's display value.
    #[must_use]
    pub fn value(&self) -> Value {
        self.inner.borrow().value.clone()
    }

    /// The node's metadata, if any was set.
    #[must_use]
    pub fn meta(&self) -> Option<Value> {
        self.inner.borrow().meta.clone()
    }

    /// Replace the node's display value. The structure is untouched.
    pub fn set_value(&self, value: impl Into<Value>) {
        self.inner.borrow_mut().value = value.into();
    }

    /// Replace the node's metadata. The structure is untouched.
    pub fn set_meta(&self, meta: impl Into<Value>) {
        self.inner.borrow_mut().meta = Some(meta.into());
    }

    /// The parent node, or `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let parent = self.inner.borrow().parent.upgrade()?;
        Some(Self { inner: parent })
    }

    /// Handles to all direct children, in insertion order.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.inner.borrow().children.clone()
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.inner.borrow().children.is_empty()
    }

    /// The most recently appended child, or `None` when there are none.
    #[must_use]
    pub fn last_child(&self) -> Option<Self> {
        self.inner.borrow().children.last().cloned()
    }

    /// Find the first descendant whose value equals the given one.
    ///
    /// The search runs depth-first in pre-order over all descendants (the
    /// receiver itself is not considered) and compares by deep structural
    /// equality. Metadata is never consulted.
    #[must_use]
    pub fn find_by_value(&self, value: impl Into<Value>) -> Option<Self> {
        self.find_value(&value.into())
    }

    fn find_value(&self, value: &Value) -> Option<Self> {
        for child in self.children() {
            if child.inner.borrow().value == *value {
                return Some(child);
            }
            if let Some(found) = child.find_value(value) {
                return Some(found);
            }
        }
        None
    }

    /// Find the first descendant whose metadata equals the given value.
    ///
    /// Same traversal as [`find_by_value`](Self::find_by_value); nodes
    /// without metadata never match.
    #[must_use]
    pub fn find_by_meta(&self, meta: impl Into<Value>) -> Option<Self> {
        self.find_meta(&meta.into())
    }

    fn find_meta(&self, meta: &Value) -> Option<Self> {
        for child in self.children() {
            if child.inner.borrow().meta.as_ref() == Some(meta) {
                return Some(child);
            }
            if let Some(found) = child.find_meta(meta) {
                return Some(found);
            }
        }
        None
    }

    /// Invoke the visitor for every descendant, in pre-order.
    ///
    /// Each direct child is visited in insertion order, and its whole
    /// subtree is traversed before the next sibling, so every node is seen
    /// before any of its own descendants.
    pub fn visit_all<F>(&self, mut visitor: F)
    where
        F: FnMut(&Self),
    {
        self.visit_children(&mut visitor);
    }

    fn visit_children<F>(&self, visitor: &mut F)
    where
        F: FnMut(&Self),
    {
        for child in self.children() {
            visitor(&child);
            if child.has_children() {
                child.visit_children(visitor);
            }
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle identity: two handles are equal when they address the same node.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Tree {}
