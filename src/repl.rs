//! The interactive loop bound to standard input/output (`spec.md` §6
//! "Command-line surface"): a thin driver reading lines from stdin and
//! handing each to `Interpreter::eval_line`.

use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::runtime::error::InterpError;
use crate::runtime::interpreter::Interpreter;

const BANNER: &str = "cellforth — a small stack-based language";

/// Run the REPL to completion, returning the process exit code.
pub fn run(config: Config) -> i32 {
    let mut interp = Interpreter::new(config);
    if let Err(err) = crate::runtime::built_ins::register_built_ins(&mut interp) {
        eprintln!("Error: failed to register built-in words: {err}");
        return 1;
    }

    println!("{BANNER}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        if line.trim_end() == "quit" {
            return 0;
        }

        match interp.eval_line(&line, &mut stdout) {
            Ok(()) => {
                let _ = stdout.flush();
            }
            Err(InterpError::AllocationFailure) => {
                eprintln!("Error: allocation failure");
                return 1;
            }
            Err(err) => {
                let _ = stdout.flush();
                eprintln!("Error: {err}");
            }
        }
    }

    0
}
