//! Registration of every primitive word the core predefines (`spec.md`
//! §4.7, §6 "Recognized word names"). One module per category, each
//! exposing a `&[PrimitiveSpec]` table; a single loop installs them all,
//! rather than a macro invocation repeated once per word.

mod arithmetic;
mod bitwise;
mod comparison;
mod control;
mod defining;
mod io;
mod memory_ops;
mod stack_ops;

use crate::runtime::dictionary::WordRecord;
use crate::runtime::error::Result;
use crate::runtime::interpreter::{Interpreter, PrimitiveFn};

/// One row of a category's registration table: the word's canonical
/// spelling, whether it runs even while compiling, and its handler.
pub struct PrimitiveSpec {
    pub name: &'static str,
    pub immediate: bool,
    pub handler: PrimitiveFn,
}

fn register(interp: &mut Interpreter, specs: &[PrimitiveSpec]) -> Result<()> {
    for spec in specs {
        interp.dictionary.add(WordRecord::primitive(
            spec.name.to_string(),
            spec.immediate,
            spec.handler,
        ))?;
    }
    Ok(())
}

/// Install the full predefined word set into a freshly constructed
/// interpreter. Called once at startup.
pub fn register_built_ins(interp: &mut Interpreter) -> Result<()> {
    register(interp, arithmetic::WORDS)?;
    register(interp, comparison::WORDS)?;
    register(interp, bitwise::WORDS)?;
    register(interp, stack_ops::WORDS)?;
    register(interp, memory_ops::WORDS)?;
    register(interp, defining::WORDS)?;
    register(interp, io::WORDS)?;
    register(interp, control::WORDS)?;
    Ok(())
}
