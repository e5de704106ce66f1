//! Parse tree
//!
//! Interior nodes are labeled with non-terminal names (`<graph>`, `<action>`,
//! ...); leaves carry token literals. Children are kept in left-to-right order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn leaf(label: impl Into<String>) -> Self {
        Self::new(label)
    }

    pub fn push_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree carrying `label`
    pub fn count_labeled(&self, label: &str) -> usize {
        let own = usize::from(self.label == label);
        own + self
            .children
            .iter()
            .map(|child| child.count_labeled(label))
            .sum::<usize>()
    }

    /// Levels in this subtree; a lone leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Leaf labels in left-to-right order
    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a str>) {
        if self.is_leaf() {
            leaves.push(&self.label);
        } else {
            for child in &self.children {
                child.collect_leaves(leaves);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_tree() -> TreeNode {
        let mut x = TreeNode::new("<x>");
        x.push_child(TreeNode::leaf("A"));
        let mut y = TreeNode::new("<y>");
        y.push_child(TreeNode::leaf("2"));

        let mut action = TreeNode::new("<action>");
        action.push_child(TreeNode::leaf("fill"));
        action.push_child(x);
        action.push_child(y);
        action
    }

    #[test]
    fn test_leaves_in_order() {
        assert_eq!(fill_tree().leaves(), vec!["fill", "A", "2"]);
    }

    #[test]
    fn test_depth_and_counts() {
        let tree = fill_tree();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.count_labeled("<x>"), 1);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&TreeNode::leaf("HI")).unwrap();
        assert_eq!(json, r#"{"label":"HI"}"#);
    }
}
