//! The final decision-tree representation.
use serde::{Serialize, Deserialize};

use super::split::{LR, Splitter};


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node<L> {
    /// A node that have two childrens.
    Branch(BranchNode<L>),

    /// A node that have no child.
    Leaf(LeafNode<L>),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode<L> {
    pub(crate) splitter: Splitter,
    pub(crate) left: Box<Node<L>>,
    pub(crate) right: Box<Node<L>>,
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode<L> {
    pub(crate) value: L,
}


impl<L> Node<L> {
    /// The leaf payload covering one observation's feature vector.
    #[inline]
    pub fn predict(&self, x: &[f64]) -> &L {
        match self {
            Node::Branch(ref node) => node.predict(x),
            Node::Leaf(ref node) => node.value(),
        }
    }


    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Branch(ref node) => {
                1 + node.left.node_count() + node.right.node_count()
            },
            Node::Leaf(_) => 1,
        }
    }


    /// Number of nodes on the longest path from `self` to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(ref node) => {
                1 + node.left.depth().max(node.right.depth())
            },
            Node::Leaf(_) => 1,
        }
    }
}


impl<L> BranchNode<L> {
    /// The split rule of this branch.
    #[inline]
    pub fn splitter(&self) -> &Splitter {
        &self.splitter
    }


    /// The subtree of observations at or below the threshold.
    #[inline]
    pub fn left(&self) -> &Node<L> {
        &self.left
    }


    /// The subtree of observations above the threshold.
    #[inline]
    pub fn right(&self) -> &Node<L> {
        &self.right
    }


    #[inline]
    fn predict(&self, x: &[f64]) -> &L {
        match self.splitter.split(x) {
            LR::Left => self.left.predict(x),
            LR::Right => self.right.predict(x),
        }
    }
}


impl<L> LeafNode<L> {
    /// The prediction payload of this leaf.
    #[inline]
    pub fn value(&self) -> &L {
        &self.value
    }
}


/// A trained CART decision tree, the sole artifact of training.
///
/// Prediction traverses one threshold comparison per branch node
/// until reaching a leaf, and returns that leaf's payload:
/// a weighted mean for regression trees, a class-probability vector
/// for classification trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree<L> {
    root: Node<L>,
}


impl<L> DecisionTree<L> {
    #[inline]
    pub(crate) fn new(root: Node<L>) -> Self {
        Self { root }
    }


    /// The root node.
    #[inline]
    pub fn root(&self) -> &Node<L> {
        &self.root
    }


    /// The leaf payload covering one observation's feature vector.
    #[inline]
    pub fn predict(&self, x: &[f64]) -> &L {
        self.root.predict(x)
    }


    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }


    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
