#[allow(non_snake_case)]
pub mod Brutto;
#[allow(non_snake_case)]
pub mod Examples;
