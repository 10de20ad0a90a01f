/// Worked examples of the brutto engine: parsing, compiling, phase marks,
/// group shorthands and the composition matrix. Pick a task by number.
pub mod brutto_examples;
