//! Tree vertices with owned children and a weak back reference to the parent.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// Label of every root node.
pub const ROOT_LABEL: &str = ">";

pub type NodeRef = Rc<RefCell<Node>>;
pub type WeakNodeRef = Weak<RefCell<Node>>;

/// Payload of a node: its depth from the root and its path name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeValue {
    pub level: usize,
    pub label: String,
}

impl NodeValue {
    pub fn new(level: usize, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    /// `(0, ">")`
    pub fn root() -> Self {
        Self::new(0, ROOT_LABEL)
    }

    /// Value of the `index`-th child: one level deeper, `.<index>` appended to the label.
    pub fn child(&self, index: usize) -> Self {
        Self::new(self.level + 1, format!("{}.{}", self.label, index))
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}')", self.level, self.label)
    }
}

/*
Ownership:
A node owns its children through Rc<RefCell<Node>>; the child points back with a Weak,
so dropping the root drops the whole tree. RefCell is only borrowed mutably while the
builder attaches children; traversals take shared borrows.
 */
#[derive(Debug)]
pub struct Node {
    /// Parent node, None for the root
    pub parent: Option<WeakNodeRef>,
    /// Children in sibling order
    pub children: Vec<NodeRef>,
    pub value: NodeValue,
}

impl Node {
    pub fn new_root(value: NodeValue) -> NodeRef {
        Rc::new(RefCell::new(Node {
            parent: None,
            children: Vec::new(),
            value,
        }))
    }

    /// Creates a node and appends it to `parent`'s children.
    pub fn new_child(parent: &NodeRef, value: NodeValue) -> NodeRef {
        let child = Rc::new(RefCell::new(Node {
            parent: Some(Rc::downgrade(parent)),
            children: Vec::new(),
            value,
        }));
        parent.borrow_mut().children.push(Rc::clone(&child));
        child
    }

    pub fn parent(&self) -> Option<NodeRef> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn level(&self) -> usize {
        self.value.level
    }

    pub fn label(&self) -> &str {
        &self.value.label
    }

    /// Number of nodes in this subtree, including self.
    pub fn count(&self) -> usize {
        let mut count = 1;
        let mut stack: Vec<NodeRef> = self.children.iter().map(Rc::clone).collect();

        while let Some(node_rc) = stack.pop() {
            count += 1;
            stack.extend(node_rc.borrow().children.iter().map(Rc::clone));
        }

        count
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 1;
        let mut queue: VecDeque<(NodeRef, usize)> =
            self.children.iter().map(|c| (Rc::clone(c), 2)).collect();

        while let Some((node_rc, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in &node_rc.borrow().children {
                queue.push_back((Rc::clone(child), depth + 1));
            }
        }

        max_depth
    }

    /// Labels of all leaves below (or at) this node, left to right.
    pub fn leaf_labels(&self) -> Vec<String> {
        if self.is_leaf() {
            return vec![self.value.label.clone()];
        }

        let mut leaves = Vec::new();
        let mut stack: Vec<NodeRef> = self.children.iter().rev().map(Rc::clone).collect();

        while let Some(node_rc) = stack.pop() {
            let node = node_rc.borrow();
            if node.is_leaf() {
                leaves.push(node.value.label.clone());
            } else {
                stack.extend(node.children.iter().rev().map(Rc::clone));
            }
        }

        leaves
    }
}

// Dropping a subtree unlinks it level by level; the derived drop would recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);

        while let Some(child_rc) = pending.pop() {
            if let Ok(child) = Rc::try_unwrap(child_rc) {
                pending.append(&mut child.into_inner().children);
            }
        }
    }
}
