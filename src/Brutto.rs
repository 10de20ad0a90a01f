/// Splits a brutto formula string into the flat sequence of lexical units:
/// element symbols, counts, opening and closing brackets. Any other character
/// (whitespace included) is a parse error. The error types of the whole
/// parsing pipeline also live here.
pub mod tokenizer;
/// eng
/// The module takes the token sequence and builds the formula tree: a leaf is
/// an element symbol with its local count, a group is a bracketed sequence of
/// child nodes with a multiplier. The tree is then flattened into the atomic
/// composition, group multipliers distribute over all descendants.
/// Built with an explicit stack of open-group frames, so deeply nested input
/// cannot blow the call stack.
/// ru
/// Модуль берет последовательность токенов и строит дерево формулы: лист -
/// символ элемента с локальным коэффициентом, группа - последовательность
/// дочерних узлов в скобках с множителем. Затем дерево сворачивается в
/// атомный состав, множители групп распространяются на всех потомков.
pub mod brutto_tree;
/// Ordered element -> count container. Keeps the order of first appearance
/// for reproducible compilation, compares order-independently, returns 0 for
/// absent symbols.
pub mod composition;
/// Facade of the brutto engine: string -> composition and composition ->
/// canonical string, plus phase-mark filtering and chemical group shorthands.
///
///  # Examples
/// ```
/// use BruttoLib::Brutto::brutto_api::Brutto;
/// let brutto = Brutto::from_formula("Ca3(PO4)2").unwrap();
/// assert_eq!(brutto.to_string(), "Ca3P2O8");
/// assert_eq!(brutto.get("O"), 8);
/// assert_eq!(brutto.get("N"), 0);
/// println!("{}", brutto);
/// ```
pub mod brutto_api;
/// Element composition matrix for a vector of formulae.
///
///  # Examples
/// ```
/// use BruttoLib::Brutto::composition_matrix::create_composition_matrix;
/// let vec_of_formulae = ["H2O", "NaCl", "C3H8", "CH4"]; // 5 elements
/// let (matrix, elems) = create_composition_matrix(&vec_of_formulae).unwrap();
/// println!("{}", matrix);
/// assert_eq!(elems.len(), 5);
/// ```
pub mod composition_matrix;
