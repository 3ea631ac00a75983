use std::io::{BufRead, Write};

use log::warn;

use crate::{analyzer::Analyzer, error::LexError};

const MENU: &str = "1. Call lex()\n2. Show symbol table\n3. Exit\n";
const PROMPT: &str = "Choose one option:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Lex,
    ShowSymbolTable,
    Exit,
}

impl std::str::FromStr for MenuOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuOption::Lex),
            "2" => Ok(MenuOption::ShowSymbolTable),
            "3" => Ok(MenuOption::Exit),
            _ => Err(()),
        }
    }
}

/// Menu loop over `text`. Returns on option 3 or end of input.
pub fn run<R, W>(
    mut input: R,
    mut output: W,
    analyzer: &mut Analyzer,
    text: &str,
) -> Result<(), LexError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{}{}", MENU, PROMPT).map_err(LexError::Repl)?;
        output.flush().map_err(LexError::Repl)?;

        line.clear();
        if input.read_line(&mut line).map_err(LexError::Repl)? == 0 {
            writeln!(output).map_err(LexError::Repl)?;
            return Ok(());
        }

        match line.parse::<MenuOption>() {
            Ok(MenuOption::Exit) => return Ok(()),
            Ok(MenuOption::ShowSymbolTable) => {
                writeln!(output, "{}", analyzer.symbol_table()).map_err(LexError::Repl)?;
            }
            Ok(MenuOption::Lex) => {
                for result in analyzer.analyze(text) {
                    writeln!(output, "{}", result).map_err(LexError::Repl)?;
                }
            }
            Err(()) => {
                warn!("invalid menu option {:?}", line.trim());
                writeln!(output, "ERROR: invalid option!").map_err(LexError::Repl)?;
            }
        }
    }
}
