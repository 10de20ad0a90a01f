//! Element composition matrix for a vector of brutto formulae. Row i holds the
//! atom counts of formula i over the union of all element symbols, which is
//! the n-formula generalization of `Brutto::to_tuple` and the shape external
//! mass-computation code wants its input in.

use crate::Brutto::brutto_api::{Brutto, parse_formula};
use crate::Brutto::composition::AtomicComposition;
use crate::Brutto::tokenizer::BruttoError;
use log::info;
use nalgebra::DMatrix;

/// Parses every formula and builds the composition matrix together with the
/// element list its columns correspond to. Column order is the order of first
/// appearance across the formula list, so the result is reproducible for a
/// given input (no hash-order surprises).
pub fn create_composition_matrix(
    vec_of_formulae: &[&str],
) -> Result<(DMatrix<f64>, Vec<String>), BruttoError> {
    info!(
        "creating element composition matrix for {} formulae",
        vec_of_formulae.len()
    );
    let mut compositions: Vec<AtomicComposition> = Vec::new();
    let mut unique_elems: Vec<String> = Vec::new();
    for formula in vec_of_formulae {
        let composition = parse_formula(formula)?;
        for (symbol, _) in composition.iter() {
            if !unique_elems.iter().any(|elem| elem == symbol) {
                unique_elems.push(symbol.to_string());
            }
        }
        compositions.push(composition);
    }

    let mut matrix = DMatrix::zeros(compositions.len(), unique_elems.len());
    for (i, composition) in compositions.iter().enumerate() {
        for (j, elem) in unique_elems.iter().enumerate() {
            matrix[(i, j)] = composition.get(elem) as f64;
        }
    }
    info!(
        "composition matrix ready: {} x {}",
        matrix.nrows(),
        matrix.ncols()
    );
    Ok((matrix, unique_elems))
}

/// Projects already-constructed facades onto a caller-supplied element
/// ordering. Absent elements contribute zero columns.
pub fn composition_matrix_for(bruttos: &[Brutto], elems: &[&str]) -> DMatrix<f64> {
    let mut matrix = DMatrix::zeros(bruttos.len(), elems.len());
    for (i, brutto) in bruttos.iter().enumerate() {
        for (j, count) in brutto.to_tuple(elems).into_iter().enumerate() {
            matrix[(i, j)] = count as f64;
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_shape_and_column_order() {
        let vec_of_formulae = ["H2O", "NaCl", "C3H8", "CH4"]; // 5 elements
        let (matrix, elems) = create_composition_matrix(&vec_of_formulae).unwrap();
        assert_eq!(matrix.nrows(), 4);
        assert_eq!(matrix.ncols(), 5);
        assert_eq!(elems, vec!["H", "O", "Na", "Cl", "C"]);
    }

    #[test]
    fn test_matrix_entries() {
        let (matrix, elems) = create_composition_matrix(&["H2O", "C3H8"]).unwrap();
        assert_eq!(elems, vec!["H", "O", "C"]);
        // H2O row
        assert_eq!(matrix[(0, 0)], 2.0);
        assert_eq!(matrix[(0, 1)], 1.0);
        assert_eq!(matrix[(0, 2)], 0.0);
        // C3H8 row
        assert_eq!(matrix[(1, 0)], 8.0);
        assert_eq!(matrix[(1, 1)], 0.0);
        assert_eq!(matrix[(1, 2)], 3.0);
    }

    #[test]
    fn test_bad_formula_rejects_whole_matrix() {
        assert!(matches!(
            create_composition_matrix(&["H2O", "H2("]),
            Err(BruttoError::UnbalancedGroup { .. })
        ));
    }

    #[test]
    fn test_matrix_for_given_element_ordering() {
        let bruttos = vec![
            Brutto::from_formula("H2O").unwrap(),
            Brutto::from_formula("CH4").unwrap(),
        ];
        let matrix = composition_matrix_for(&bruttos, &["C", "H", "N"]);
        assert_eq!(matrix[(0, 0)], 0.0);
        assert_eq!(matrix[(0, 1)], 2.0);
        assert_eq!(matrix[(0, 2)], 0.0);
        assert_eq!(matrix[(1, 0)], 1.0);
        assert_eq!(matrix[(1, 1)], 4.0);
        assert_eq!(matrix[(1, 2)], 0.0);
    }
}
