//! # Brutto Tree Module
//!
//! ## Purpose
//! Builds the formula tree out of the token sequence and flattens it into an
//! `AtomicComposition`. The tree is transient, both structures live only for
//! the duration of one parse call.
//!
//! ## Main Data Structures
//! - `FormulaNode`: either a `Leaf` (element symbol + local count) or a
//!   `Group` (child nodes + group multiplier). Counts default to 1 when the
//!   source carries no digits.
//!
//! ## Key Logic Implementation
//! 1. **Tree building**: a stack of open-group frames instead of language
//!    recursion, so nesting depth is bounded by the input length and not by
//!    the call stack
//! 2. **Count attachment**: a count token always attaches to the last node of
//!    the current frame, as a local count for a leaf and as a multiplier for
//!    a closed group; a count with nothing in front of it is rejected
//! 3. **Aggregation**: depth-first document-order walk carrying the product
//!    of the ancestor multipliers, every leaf contributes
//!    `count * accumulated multiplier`, checked arithmetic throughout

use crate::Brutto::composition::AtomicComposition;
use crate::Brutto::tokenizer::{BruttoError, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaNode {
    Leaf {
        symbol: String,
        count: usize,
    },
    Group {
        children: Vec<FormulaNode>,
        multiplier: usize,
    },
}

// an open-group frame: position of the '(' that opened it (0 for the
// top-level sequence) and the nodes collected so far
struct GroupFrame {
    open_position: usize,
    nodes: Vec<FormulaNode>,
}

/// Consumes the token sequence into the top-level node list.
/// "Ca3(PO4)2" becomes [Leaf Ca 3, Group [Leaf P, Leaf O 4] x2].
pub fn build_brutto_tree(tokens: &[Token]) -> Result<Vec<FormulaNode>, BruttoError> {
    let mut stack = vec![GroupFrame {
        open_position: 0,
        nodes: Vec::new(),
    }];
    for token in tokens {
        match &token.kind {
            TokenKind::Element(symbol) => {
                let frame = stack.last_mut().unwrap();
                frame.nodes.push(FormulaNode::Leaf {
                    symbol: symbol.clone(),
                    count: 1,
                });
            }
            TokenKind::Count(value) => {
                let frame = stack.last_mut().unwrap();
                let node = frame
                    .nodes
                    .last_mut()
                    .ok_or_else(|| BruttoError::UnexpectedToken {
                        token: value.to_string(),
                        position: token.position,
                    })?;
                match node {
                    FormulaNode::Leaf { symbol, count } => {
                        if *value == 0 {
                            return Err(BruttoError::InvalidCount {
                                context: symbol.clone(),
                                count: 0,
                            });
                        }
                        *count = *value;
                    }
                    FormulaNode::Group { multiplier, .. } => {
                        if *value == 0 {
                            return Err(BruttoError::InvalidCount {
                                context: "group".to_string(),
                                count: 0,
                            });
                        }
                        *multiplier = *value;
                    }
                }
            }
            TokenKind::GroupOpen => {
                stack.push(GroupFrame {
                    open_position: token.position,
                    nodes: Vec::new(),
                });
            }
            TokenKind::GroupClose => {
                if stack.len() == 1 {
                    return Err(BruttoError::UnbalancedGroup {
                        position: token.position,
                    });
                }
                let frame = stack.pop().unwrap();
                let parent = stack.last_mut().unwrap();
                parent.nodes.push(FormulaNode::Group {
                    children: frame.nodes,
                    multiplier: 1,
                });
            }
        }
    }
    if stack.len() > 1 {
        return Err(BruttoError::UnbalancedGroup {
            position: stack.last().unwrap().open_position,
        });
    }
    Ok(stack.pop().unwrap().nodes)
}

/// Flattens a node list into the element -> total count composition.
/// Entries appear in document order of first appearance, duplicates are
/// summed, group multipliers distribute over all descendants.
pub fn aggregate(nodes: &[FormulaNode]) -> Result<AtomicComposition, BruttoError> {
    let mut composition = AtomicComposition::new();
    // children go on the work stack in reverse so they pop in document order
    let mut work: Vec<(&FormulaNode, usize)> =
        nodes.iter().rev().map(|node| (node, 1usize)).collect();
    while let Some((node, outer)) = work.pop() {
        match node {
            FormulaNode::Leaf { symbol, count } => {
                let total = count
                    .checked_mul(outer)
                    .ok_or_else(|| BruttoError::Overflow {
                        context: symbol.clone(),
                    })?;
                composition.add(symbol, total)?;
            }
            FormulaNode::Group {
                children,
                multiplier,
            } => {
                let inner = multiplier
                    .checked_mul(outer)
                    .ok_or_else(|| BruttoError::Overflow {
                        context: "group".to_string(),
                    })?;
                for child in children.iter().rev() {
                    work.push((child, inner));
                }
            }
        }
    }
    Ok(composition)
}
