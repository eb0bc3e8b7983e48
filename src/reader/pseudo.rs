/*!
Recognition of pseudo-atoms in the symbol section.

Some grounders encode directives as atoms with reserved names:
- `_edge(U,V)` and `_acyc_ID_U_V` stand for an edge from node `U` to node `V`.
- `_heuristic(A,M,B)` and `_heuristic(A,M,B,P)` stand for a heuristic modification of the atom named `A` with modifier `M`, bias `B`, and priority `P`.

The prefixes are taken from [PseudoAtomNames].
A name with a recognised prefix which otherwise does not match the expected shape is not a pseudo-atom.

Nodes of `_edge` atoms are arbitrary terms, mapped to integers by a [NodeTable].
Nodes of `_acyc_` atoms are integers.
*/

use std::collections::HashMap;

use crate::{config::PseudoAtomNames, structures::directive::HeuristicModifier};

/// A node of an edge pseudo-atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeNode<'n> {
    /// A term, to be mapped to an integer.
    Term(&'n str),

    /// An integer.
    Id(i32),
}

/// The directive a pseudo-atom stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PseudoAtom<'n> {
    Edge {
        source: EdgeNode<'n>,
        target: EdgeNode<'n>,
    },

    Heuristic {
        target: &'n str,
        modifier: HeuristicModifier,
        bias: i32,
        priority: u32,
    },
}

/// Splits the arguments of a term at top-level commas, respecting nested brackets and quoted strings.
///
/// Returns None if the brackets or quotes are unbalanced.
fn split_arguments(arguments: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::default();
    let mut depth: usize = 0;
    let mut quoted = false;
    let mut escaped = false;
    let mut start = 0;

    for (index, character) in arguments.char_indices() {
        if quoted {
            match (escaped, character) {
                (true, _) => escaped = false,
                (false, '\\') => escaped = true,
                (false, '"') => quoted = false,
                _ => {}
            }
            continue;
        }
        match character {
            '"' => quoted = true,
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(arguments[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }

    if quoted || depth != 0 {
        return None;
    }
    parts.push(arguments[start..].trim());
    Some(parts)
}

/// The arguments of `name`, if `name` is a term with functor `functor`.
fn term_arguments<'n>(name: &'n str, functor: &str) -> Option<Vec<&'n str>> {
    let inner = name
        .strip_prefix(functor)?
        .strip_prefix('(')?
        .strip_suffix(')')?;
    let parts = split_arguments(inner)?;
    match parts.iter().any(|part| part.is_empty()) {
        true => None,
        false => Some(parts),
    }
}

/// The directive `name` stands for, if `name` is the name of an edge pseudo-atom.
pub fn match_edge<'n>(name: &'n str, names: &PseudoAtomNames) -> Option<PseudoAtom<'n>> {
    if let Some(arguments) = term_arguments(name, &names.edge) {
        let [source, target] = *arguments.as_slice() else {
            return None;
        };
        return Some(PseudoAtom::Edge {
            source: EdgeNode::Term(source),
            target: EdgeNode::Term(target),
        });
    }

    let flat = name.strip_prefix(names.acyc.as_str())?;
    let mut parts = flat.split('_');
    let (Some(id), Some(source), Some(target), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    let _ = id.parse::<u32>().ok()?;
    let source = source.parse::<i32>().ok().filter(|node| *node >= 0)?;
    let target = target.parse::<i32>().ok().filter(|node| *node >= 0)?;
    Some(PseudoAtom::Edge {
        source: EdgeNode::Id(source),
        target: EdgeNode::Id(target),
    })
}

/// The directive `name` stands for, if `name` is the name of a heuristic pseudo-atom.
pub fn match_heuristic<'n>(name: &'n str, names: &PseudoAtomNames) -> Option<PseudoAtom<'n>> {
    let arguments = term_arguments(name, &names.heuristic)?;
    let (target, modifier, bias, priority) = match arguments.as_slice() {
        [target, modifier, bias] => (*target, *modifier, *bias, None),
        [target, modifier, bias, priority] => (*target, *modifier, *bias, Some(*priority)),
        _ => return None,
    };

    let modifier = modifier.parse::<HeuristicModifier>().ok()?;
    let bias = bias.parse::<i32>().ok()?;
    let priority = match priority {
        Some(priority) => priority.parse::<u32>().ok()?,
        None => bias.unsigned_abs(),
    };

    Some(PseudoAtom::Heuristic {
        target,
        modifier,
        bias,
        priority,
    })
}

/// Whether `name` has the prefix of an edge pseudo-atom, regardless of whether the name is otherwise well-formed.
pub fn has_edge_prefix(name: &str, names: &PseudoAtomNames) -> bool {
    name.starts_with(&format!("{}(", names.edge)) || name.starts_with(names.acyc.as_str())
}

/// Whether `name` has the prefix of a heuristic pseudo-atom.
pub fn has_heuristic_prefix(name: &str, names: &PseudoAtomNames) -> bool {
    name.starts_with(&format!("{}(", names.heuristic))
}

/// A map from the terms of edge nodes to integers.
///
/// Terms are given integers in order of their first use, from 0 up to some maximum (by default `i32::MAX`).
#[derive(Debug)]
pub struct NodeTable {
    nodes: HashMap<String, i32>,
    max: i32,
}

impl Default for NodeTable {
    fn default() -> Self {
        NodeTable::with_max(i32::MAX)
    }
}

impl NodeTable {
    /// A table whose integers do not exceed `max`.
    pub fn with_max(max: i32) -> Self {
        NodeTable {
            nodes: HashMap::default(),
            max,
        }
    }

    /// The integer of `node`, if `node` has or can be given an integer.
    pub fn node(&mut self, node: EdgeNode) -> Option<i32> {
        match node {
            EdgeNode::Id(id) => Some(id),
            EdgeNode::Term(term) => {
                if let Some(id) = self.nodes.get(term) {
                    return Some(*id);
                }
                let fresh = i32::try_from(self.nodes.len())
                    .ok()
                    .filter(|fresh| *fresh <= self.max)?;
                self.nodes.insert(term.to_owned(), fresh);
                Some(fresh)
            }
        }
    }
}
