//! The opcode dispatch loop (`spec.md` §4.8): runs a compiled word's code
//! vector from start to end, recursing into `Call`ed words.

use std::io::Write;

use crate::lang::code::Op;
use crate::lang::tokenizer::Tokenizer;
use crate::runtime::dictionary::{WordId, WordKind};
use crate::runtime::error::{InterpError, Result};
use crate::runtime::interpreter::Interpreter;

/// Run the word named by `word_id` to completion. A primitive hands
/// straight to its Rust handler; a compiled word runs its code vector
/// through the dispatch loop below, one opcode at a time, with `Call`
/// recursing back into this same function.
pub fn execute_word(
    interp: &mut Interpreter,
    tokenizer: &mut Tokenizer,
    out: &mut dyn Write,
    word_id: WordId,
) -> Result<()> {
    let record = interp
        .dictionary
        .get(word_id)
        .expect("execute_word called with a valid id");

    match record.kind.clone() {
        WordKind::Primitive(handler) => {
            tracing::trace!(word_id, "dispatching primitive");
            handler(interp, tokenizer, out)
        }
        WordKind::Compiled(code) => {
            let mut pc: usize = 0;

            while pc < code.len() {
                let op = code[pc].clone();
                tracing::trace!(word_id, pc, op = %op, "dispatching opcode");

                match op {
                    Op::Lit(value) => {
                        interp.push(value)?;
                        pc += 1;
                    }

                    Op::PrintLit(text) => {
                        out.write_all(text.as_bytes())
                            .map_err(|_| InterpError::AllocationFailure)?;
                        pc += 1;
                    }

                    Op::Branch(offset) => {
                        pc = advance(pc, offset)?;
                    }

                    Op::ZBranch(offset) => {
                        let flag = interp.pop()?;
                        if flag == 0 {
                            pc = advance(pc, offset)?;
                        } else {
                            pc += 1;
                        }
                    }

                    Op::Do => {
                        let start = interp.pop()?;
                        let limit = interp.pop()?;
                        interp.push_return(limit)?;
                        interp.push_return(start)?;
                        pc += 1;
                    }

                    Op::Loop(offset) => {
                        let index = interp.pop_return()? + 1;
                        let limit = interp.peek_return(0)?;

                        if index < limit {
                            interp.push_return(index)?;
                            pc = advance(pc, offset)?;
                        } else {
                            interp.pop_return()?; // discard limit
                            pc += 1;
                        }
                    }

                    Op::Call(callee) => {
                        execute_word(interp, tokenizer, out, callee)?;
                        pc += 1;
                    }
                }
            }

            Ok(())
        }
    }
}

/// Apply a signed, `spec.md` §4.6-style relative offset (measured from the
/// position right after the branching instruction) to the program counter.
fn advance(pc: usize, offset: i32) -> Result<usize> {
    let next = pc as i64 + 1 + offset as i64;
    if next < 0 {
        return Err(InterpError::UnclosedControlStructure);
    }
    Ok(next as usize)
}
