//! # Atomic Composition Module
//!
//! ## Purpose
//! Ordered container mapping element symbol -> total atom count, the durable
//! output of brutto formula parsing and the input of brutto compilation.
//!
//! ## Main Data Structures
//! - `AtomicComposition`: vector of (symbol, count) pairs in order of first
//!   appearance plus a symbol -> slot index map for fast lookup. A plain
//!   HashMap is deliberately not used here: the stored order is what makes
//!   the compiled brutto string reproducible for a given input.
//!
//! ## Key Logic Implementation
//! 1. **Validated insertion**: `add` checks the element symbol against the
//!    chemical-symbol pattern, rejects zero counts and sums duplicates with
//!    checked arithmetic, so every stored count is a positive integer
//! 2. **Sparse lookup**: `get` returns 0 for a symbol that never appeared,
//!    it is a defined contract for downstream mass consumers, not an error
//! 3. **Equality**: two compositions are equal when they hold the same
//!    symbol/count set, the stored order does not participate
//! 4. **Serde**: (de)serialized as a sequence of pairs so the order survives
//!    a round trip through serde_json and counts are re-validated on input

use crate::Brutto::tokenizer::BruttoError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, usize)>", into = "Vec<(String, usize)>")]
pub struct AtomicComposition {
    pairs: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl AtomicComposition {
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_pairs(pairs: &[(&str, usize)]) -> Result<Self, BruttoError> {
        let mut composition = Self::new();
        for (symbol, count) in pairs {
            composition.add(symbol, *count)?;
        }
        Ok(composition)
    }

    /// Adds `count` atoms of `symbol`, creating the entry at first appearance
    /// and summing into the existing one otherwise.
    pub fn add(&mut self, symbol: &str, count: usize) -> Result<(), BruttoError> {
        let re = Regex::new(r"^[A-Z][a-z]*$").unwrap();
        if !re.is_match(symbol) {
            let (position, bad) = symbol
                .chars()
                .enumerate()
                .find(|(i, c)| {
                    (*i == 0 && !c.is_ascii_uppercase()) || (*i > 0 && !c.is_ascii_lowercase())
                })
                .unwrap_or((0, '\0'));
            return Err(BruttoError::InvalidCharacter {
                symbol: bad,
                position,
            });
        }
        if count == 0 {
            return Err(BruttoError::InvalidCount {
                context: symbol.to_string(),
                count,
            });
        }
        match self.index.get(symbol) {
            Some(&slot) => {
                let total =
                    self.pairs[slot]
                        .1
                        .checked_add(count)
                        .ok_or_else(|| BruttoError::Overflow {
                            context: symbol.to_string(),
                        })?;
                self.pairs[slot].1 = total;
            }
            None => {
                self.index.insert(symbol.to_string(), self.pairs.len());
                self.pairs.push((symbol.to_string(), count));
            }
        }
        Ok(())
    }

    /// Count of `symbol`, 0 if the symbol never appeared.
    pub fn get(&self, symbol: &str) -> usize {
        match self.index.get(symbol) {
            Some(&slot) => self.pairs[slot].1,
            None => 0,
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Element symbols in order of first appearance.
    pub fn elements(&self) -> Vec<String> {
        self.pairs.iter().map(|(symbol, _)| symbol.clone()).collect()
    }

    /// Counts in the same order as `elements`.
    pub fn coefs(&self) -> Vec<usize> {
        self.pairs.iter().map(|(_, count)| *count).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.pairs.iter().map(|(symbol, count)| (symbol.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// stored order matters for compilation but not for deciding whether two
// compositions describe the same substance
impl PartialEq for AtomicComposition {
    fn eq(&self, other: &Self) -> bool {
        self.pairs.len() == other.pairs.len()
            && self
                .pairs
                .iter()
                .all(|(symbol, count)| other.get(symbol) == *count)
    }
}

impl Eq for AtomicComposition {}

impl TryFrom<Vec<(String, usize)>> for AtomicComposition {
    type Error = BruttoError;

    fn try_from(pairs: Vec<(String, usize)>) -> Result<Self, Self::Error> {
        let mut composition = AtomicComposition::new();
        for (symbol, count) in pairs {
            composition.add(&symbol, count)?;
        }
        Ok(composition)
    }
}

impl From<AtomicComposition> for Vec<(String, usize)> {
    fn from(composition: AtomicComposition) -> Self {
        composition.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut composition = AtomicComposition::new();
        composition.add("Ca", 3).unwrap();
        composition.add("P", 2).unwrap();
        composition.add("O", 8).unwrap();
        assert_eq!(composition.get("Ca"), 3);
        assert_eq!(composition.get("P"), 2);
        assert_eq!(composition.get("O"), 8);
        assert_eq!(composition.len(), 3);
    }

    #[test]
    fn test_absent_symbol_is_zero() {
        let composition = AtomicComposition::from_pairs(&[("H", 2), ("O", 1)]).unwrap();
        assert_eq!(composition.get("N"), 0);
        assert!(!composition.contains("N"));
    }

    #[test]
    fn test_duplicates_are_summed_in_place() {
        let mut composition = AtomicComposition::new();
        composition.add("C", 5).unwrap();
        composition.add("H", 6).unwrap();
        composition.add("C", 2).unwrap();
        assert_eq!(composition.elements(), vec!["C".to_string(), "H".to_string()]);
        assert_eq!(composition.coefs(), vec![7, 6]);
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut composition = AtomicComposition::new();
        assert_eq!(
            composition.add("H", 0),
            Err(BruttoError::InvalidCount {
                context: "H".to_string(),
                count: 0
            })
        );
    }

    #[test]
    fn test_bad_symbol_rejected() {
        let mut composition = AtomicComposition::new();
        assert!(matches!(
            composition.add("ca", 1),
            Err(BruttoError::InvalidCharacter { symbol: 'c', .. })
        ));
        assert!(matches!(
            composition.add("C3", 1),
            Err(BruttoError::InvalidCharacter { symbol: '3', .. })
        ));
        assert!(matches!(
            composition.add("", 1),
            Err(BruttoError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_add_overflow() {
        let mut composition = AtomicComposition::new();
        composition.add("H", usize::MAX).unwrap();
        assert_eq!(
            composition.add("H", 1),
            Err(BruttoError::Overflow {
                context: "H".to_string()
            })
        );
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = AtomicComposition::from_pairs(&[("H", 2), ("O", 1)]).unwrap();
        let b = AtomicComposition::from_pairs(&[("O", 1), ("H", 2)]).unwrap();
        assert_eq!(a, b);
        let c = AtomicComposition::from_pairs(&[("H", 2), ("O", 2)]).unwrap();
        assert_ne!(a, c);
        let d = AtomicComposition::from_pairs(&[("H", 2)]).unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn test_serde_round_trip_keeps_order() {
        let composition =
            AtomicComposition::from_pairs(&[("Na", 1), ("N", 2), ("O", 6)]).unwrap();
        let json = serde_json::to_string(&composition).unwrap();
        assert_eq!(json, r#"[["Na",1],["N",2],["O",6]]"#);
        let back: AtomicComposition = serde_json::from_str(&json).unwrap();
        assert_eq!(back.elements(), composition.elements());
        assert_eq!(back.coefs(), composition.coefs());
    }

    #[test]
    fn test_serde_rejects_zero_count() {
        let parsed: Result<AtomicComposition, _> = serde_json::from_str(r#"[["H",0]]"#);
        assert!(parsed.is_err());
    }
}
