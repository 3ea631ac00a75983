use std::{env, io, path::PathBuf};

use lexan::{Analyzer, LexError, repl, source::read_source};
use log::info;

const INPUT_ENV: &str = "LEXAN_INPUT";
const DEFAULT_INPUT: &str = "input.txt";

fn input_path() -> PathBuf {
    env::args_os()
        .nth(1)
        .or_else(|| env::var_os(INPUT_ENV))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

fn main() -> Result<(), LexError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path = input_path();
    info!("reading input from {}", path.display());
    let text = read_source(&path)?;

    let mut analyzer = Analyzer::new();
    repl::run(io::stdin().lock(), io::stdout().lock(), &mut analyzer, &text)
}
