//! # Brutto API Module
//!
//! ## Purpose
//! This module is the facade of the brutto formula engine. It turns a molecular
//! formula string like "Ca3(PO4)2" into the atomic composition {Ca:3, P:2, O:8}
//! and compiles a composition back into the canonical brutto string. The
//! canonical form is always fully flattened, no brackets are ever emitted.
//!
//! ## Main Data Structures
//! - `Brutto`: holds the canonical brutto string together with its
//!   `AtomicComposition`; both are populated at construction and always agree
//! - `BruttoError`: parse failures (invalid character, unbalanced group,
//!   unexpected token, zero count, count overflow), defined next to the
//!   tokenizer that starts the pipeline
//!
//! ## Key Methods
//! - `parse_formula()`: tokenize -> build tree -> aggregate pipeline
//! - `compile_brutto()`: composition -> canonical string, count 1 is dropped
//! - `Brutto::from_formula()` / `Brutto::from_composition()`: the two entry
//!   points; a `Brutto` built from a nested formula still prints flattened
//! - `to_tuple()`: count projection for a caller-supplied element ordering,
//!   consumed by external mass-computation code
//! - `filter_phase_marks()` / `expand_groups()`: thermodynamic-table phase
//!   marks and chemical group shorthands (Me, Ph, ...) support
//!
//! ## Usage
//! ```rust, ignore
//! let brutto = Brutto::from_formula("Ca3(PO4)2")?;
//! assert_eq!(brutto.to_string(), "Ca3P2O8");
//! assert_eq!(brutto.get("O"), 8);
//! assert_eq!(brutto.to_tuple(&["C", "H", "O"]), vec![0, 0, 8]);
//! ```
//!
//! ## Interesting Features
//! - Lookup of an absent element returns 0, never an error, the composition
//!   behaves like a sparse vector over the element symbols
//! - `compile` is the exact inverse of `parse` on the composition level:
//!   aggregate(parse(compile(m))) == m for every valid composition m
//! - Parsing is all-or-nothing, a malformed formula is fully rejected

use crate::Brutto::brutto_tree::{aggregate, build_brutto_tree};
use crate::Brutto::composition::AtomicComposition;
use crate::Brutto::tokenizer::{BruttoError, tokenize};
use log::debug;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Parses a formula string into its atomic composition.
/// Ca3(PO4)2 -> {Ca: 3, P: 2, O: 8}
pub fn parse_formula(formula: &str) -> Result<AtomicComposition, BruttoError> {
    debug!("parsing brutto formula: {}", formula);
    let tokens = tokenize(formula)?;
    let tree = build_brutto_tree(&tokens)?;
    aggregate(&tree)
}

/// Compiles a composition into the canonical brutto string: entries in stored
/// order, the count is omitted when it equals 1.
pub fn compile_brutto(composition: &AtomicComposition) -> String {
    let mut brutto = String::new();
    for (symbol, count) in composition.iter() {
        brutto.push_str(symbol);
        if count != 1 {
            brutto.push_str(&count.to_string());
        }
    }
    brutto
}

/// Thermodynamic tables often append a phase mark to the formula, e.g.
/// "H2O(g)" or "NaCl(s)". The strict grammar rejects those, so strip them
/// first when the formula comes from such a table.
pub fn filter_phase_marks(formula: &str) -> String {
    let mut formula = formula.to_string();
    let phases = ["(C)", "(c)", "(L)", "(l)", "(G)", "(g)", "(S)", "(s)"];
    for phase in phases {
        formula = formula.replace(phase, "");
    }
    formula
}

/// Chemical formulae may contain special names for chemical groups i.e. groups
/// of atoms, e.g. Me (methyl) which stands for {C:1, H:3}. Every alias found in
/// `groups` is removed from the composition and its atoms, multiplied by the
/// alias count, are summed in.
pub fn expand_groups(
    composition: AtomicComposition,
    groups: &HashMap<String, AtomicComposition>,
) -> Result<AtomicComposition, BruttoError> {
    let mut expanded = AtomicComposition::new();
    for (symbol, count) in composition.iter() {
        match groups.get(symbol) {
            Some(group_composition) => {
                for (atom, quantity) in group_composition.iter() {
                    let total =
                        quantity
                            .checked_mul(count)
                            .ok_or_else(|| BruttoError::Overflow {
                                context: atom.to_string(),
                            })?;
                    expanded.add(atom, total)?;
                }
            }
            None => expanded.add(symbol, count)?,
        }
    }
    Ok(expanded)
}

/// Brutto formula facade. Constructed either from a formula string or from a
/// ready composition, it always exposes the canonical flattened form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brutto {
    brutto: String,
    composition: AtomicComposition,
}

impl Brutto {
    /// Takes a brutto string and creates the composition of elements.
    pub fn from_formula(formula: &str) -> Result<Self, BruttoError> {
        let composition = parse_formula(formula)?;
        Ok(Self::from_composition(composition))
    }

    /// Same as `from_formula` but with chemical group aliases expanded, like
    /// toluene written as "C6H5Me" with Me = {C:1, H:3}.
    pub fn from_formula_with_groups(
        formula: &str,
        groups: &HashMap<String, AtomicComposition>,
    ) -> Result<Self, BruttoError> {
        let composition = expand_groups(parse_formula(formula)?, groups)?;
        Ok(Self::from_composition(composition))
    }

    /// Takes the composition and makes the string brutto out of it.
    pub fn from_composition(composition: AtomicComposition) -> Self {
        let brutto = compile_brutto(&composition);
        Self {
            brutto,
            composition,
        }
    }

    /// Count of `symbol`, 0 if the element is not part of the formula.
    pub fn get(&self, symbol: &str) -> usize {
        self.composition.get(symbol)
    }

    /// Counts projected onto a caller-supplied element ordering, absent
    /// elements contribute 0. This is what external mass-computation code
    /// consumes together with its own mass table.
    pub fn to_tuple(&self, elems: &[&str]) -> Vec<usize> {
        elems.iter().map(|elem| self.composition.get(elem)).collect()
    }

    pub fn composition(&self) -> &AtomicComposition {
        &self.composition
    }

    /// Counts in stored order, positionally matching `get_elements`.
    pub fn get_coef(&self) -> Vec<usize> {
        self.composition.coefs()
    }

    /// Element symbols in stored order, positionally matching `get_coef`.
    pub fn get_elements(&self) -> Vec<String> {
        self.composition.elements()
    }

    /// Prints the element/count table to the console.
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        let mut header_row = vec![Cell::new("Element")];
        let mut count_row = vec![Cell::new("Count")];
        for (symbol, count) in self.composition.iter() {
            header_row.push(Cell::new(symbol));
            count_row.push(Cell::new(&count.to_string()));
        }
        table.add_row(Row::new(header_row));
        table.add_row(Row::new(count_row));
        table.printstd();
    }
}

impl fmt::Display for Brutto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.brutto)
    }
}

// two facades are the same substance when their compositions agree, the
// textual order the elements happened to arrive in does not matter
impl PartialEq for Brutto {
    fn eq(&self, other: &Self) -> bool {
        self.composition == other.composition
    }
}

impl Eq for Brutto {}
