//! ASCII parse-tree rendering
//!
//! Two layouts: an indented listing with `+--` connectors, and a centered
//! grid where each parent sits above the middle of its children.

use crate::tree::TreeNode;
use serde::{Deserialize, Serialize};

/// Placeholder printed when there is no tree
pub const EMPTY_TREE: &str = "(empty tree)";

/// Columns between sibling subtrees in the centered layout
const SIBLING_GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    Indented,
    #[default]
    Centered,
}

impl TreeStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "indented" => Some(TreeStyle::Indented),
            "centered" => Some(TreeStyle::Centered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TreeStyle::Indented => "indented",
            TreeStyle::Centered => "centered",
        }
    }
}

pub fn render_tree(root: Option<&TreeNode>, style: TreeStyle) -> String {
    let Some(root) = root else {
        return EMPTY_TREE.to_string();
    };

    match style {
        TreeStyle::Indented => render_indented(root),
        TreeStyle::Centered => render_centered(root),
    }
}

// ============================================================================
// INDENTED LAYOUT
// ============================================================================

fn render_indented(root: &TreeNode) -> String {
    let mut lines = vec![root.label.clone()];
    let count = root.children.len();
    for (index, child) in root.children.iter().enumerate() {
        push_indented(child, "", index + 1 == count, &mut lines);
    }
    lines.join("\n")
}

fn push_indented(node: &TreeNode, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let connector = if is_last { "`-- " } else { "+-- " };
    lines.push(format!("{}{}{}", prefix, connector, node.label));

    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "|   " });
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        push_indented(child, &child_prefix, index + 1 == count, lines);
    }
}

// ============================================================================
// CENTERED LAYOUT
// ============================================================================

/// Rendered subtree: rows of equal width and the column of its root label's center
struct Block {
    rows: Vec<Vec<char>>,
    width: usize,
    anchor: usize,
}

impl Block {
    fn blank_row(&self) -> Vec<char> {
        vec![' '; self.width]
    }
}

fn render_centered(root: &TreeNode) -> String {
    layout(root)
        .rows
        .iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn layout(node: &TreeNode) -> Block {
    let label: Vec<char> = node.label.chars().collect();
    let half = label.len() / 2;

    if node.is_leaf() {
        return Block {
            width: label.len(),
            anchor: half,
            rows: vec![label],
        };
    }

    let children: Vec<Block> = node.children.iter().map(layout).collect();

    let mut offsets = Vec::with_capacity(children.len());
    let mut width = 0;
    for child in &children {
        if !offsets.is_empty() {
            width += SIBLING_GAP;
        }
        offsets.push(width);
        width += child.width;
    }

    let first_anchor = offsets[0] + children[0].anchor;
    let last_index = children.len() - 1;
    let last_anchor = offsets[last_index] + children[last_index].anchor;
    let mut anchor = (first_anchor + last_anchor) / 2;

    // Wide labels push the children right so the label fits from column 0
    let shift = half.saturating_sub(anchor);
    anchor += shift;
    for offset in offsets.iter_mut() {
        *offset += shift;
    }
    let width = (width + shift).max(anchor - half + label.len());

    let mut block = Block {
        rows: Vec::new(),
        width,
        anchor,
    };

    let mut label_row = block.blank_row();
    put(&mut label_row, anchor - half, &label);
    block.rows.push(label_row);

    let mut stem = block.blank_row();
    stem[anchor] = '|';
    block.rows.push(stem);

    if children.len() > 1 {
        let child_anchors: Vec<usize> = offsets
            .iter()
            .zip(&children)
            .map(|(offset, child)| offset + child.anchor)
            .collect();

        let mut span_row = block.blank_row();
        for cell in &mut span_row[first_anchor + shift..=last_anchor + shift] {
            *cell = '-';
        }
        let mut drops = block.blank_row();
        for &child_anchor in &child_anchors {
            span_row[child_anchor] = '+';
            drops[child_anchor] = '|';
        }
        block.rows.push(span_row);
        block.rows.push(drops);
    }

    let height = children.iter().map(|child| child.rows.len()).max().unwrap_or(0);
    for row_index in 0..height {
        let mut row = block.blank_row();
        for (child, offset) in children.iter().zip(&offsets) {
            if let Some(child_row) = child.rows.get(row_index) {
                put(&mut row, *offset, child_row);
            }
        }
        block.rows.push(row);
    }

    block
}

fn put(row: &mut [char], start: usize, text: &[char]) {
    for (cell, ch) in row[start..].iter_mut().zip(text) {
        *cell = *ch;
    }
}
