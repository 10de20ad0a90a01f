#[allow(non_snake_case)]
pub mod Brutto;
#[allow(non_snake_case)]
pub mod Examples;

use Examples::brutto_examples::brutto_examples;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    //
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let task: usize = 0;
    brutto_examples(task);
}
