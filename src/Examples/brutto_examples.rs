pub fn brutto_examples(task: usize) {
    //

    match task {
        0 => {
            // PARSING A BRUTTO FORMULA INTO ATOMIC COMPOSITION
            use crate::Brutto::brutto_api::{Brutto, parse_formula};
            let formula = "Ca3(PO4)2";
            let composition = parse_formula(formula).unwrap();
            println!("atomic composition of {}: {:?}", formula, composition);
            assert_eq!(composition.get("Ca"), 3);
            assert_eq!(composition.get("P"), 2);
            assert_eq!(composition.get("O"), 8);

            let brutto = Brutto::from_formula(formula).unwrap();
            // canonical form is always flattened, brackets are never emitted
            println!("canonical brutto: {}", brutto);
            assert_eq!(brutto.to_string(), "Ca3P2O8");
            brutto.pretty_print();
        }
        1 => {
            // COMPILING A COMPOSITION BACK INTO THE BRUTTO STRING
            use crate::Brutto::brutto_api::Brutto;
            use crate::Brutto::composition::AtomicComposition;
            let composition =
                AtomicComposition::from_pairs(&[("C", 6), ("H", 12), ("O", 6)]).unwrap();
            let brutto = Brutto::from_composition(composition);
            println!("glucose brutto: {}", brutto);
            assert_eq!(brutto.to_string(), "C6H12O6");

            // projection for an external mass-table service
            let counts = brutto.to_tuple(&["C", "H", "N", "O"]);
            println!("counts over [C, H, N, O]: {:?}", counts);
            assert_eq!(counts, vec![6, 12, 0, 6]);
        }
        2 => {
            // PHASE MARKS AND CHEMICAL GROUP SHORTHANDS
            use crate::Brutto::brutto_api::{Brutto, filter_phase_marks};
            use crate::Brutto::composition::AtomicComposition;
            use std::collections::HashMap;
            let from_table = "H2O(g)";
            let filtered = filter_phase_marks(from_table);
            println!("{} -> {}", from_table, filtered);
            let brutto = Brutto::from_formula(&filtered).unwrap();
            assert_eq!(brutto.to_string(), "H2O");

            let groups = HashMap::from([(
                "Me".to_string(),
                AtomicComposition::from_pairs(&[("C", 1), ("H", 3)]).unwrap(),
            )]);
            let toluol = Brutto::from_formula_with_groups("C6H5Me", &groups).unwrap();
            println!("toluene composition: {:?}", toluol.composition());
            assert_eq!(toluol.get("C"), 7);
            assert_eq!(toluol.get("H"), 8);
        }
        3 => {
            // ELEMENT COMPOSITION MATRIX FOR A VECTOR OF FORMULAE
            use crate::Brutto::composition_matrix::create_composition_matrix;
            let vec_of_formulae = ["H2O", "NaCl", "C3H8", "CH4"]; // 5 elements
            let (matrix, elems) = create_composition_matrix(&vec_of_formulae).unwrap();
            println!("elements: {:?}", elems);
            println!("{}", matrix);
            assert_eq!(matrix.nrows(), 4);
            assert_eq!(matrix.ncols(), 5);
        }
        _ => {
            println!("there is no task {}", task);
        }
    }
}
