//! `. .s cr ."` (`spec.md` §4.7 "I/O", §6 "Output conventions").

use std::io::Write;

use crate::lang::tokenizer::Tokenizer;
use crate::runtime::built_ins::PrimitiveSpec;
use crate::runtime::cell::format_cell;
use crate::runtime::error::{InterpError, Result};
use crate::runtime::interpreter::compiler::emit_print_lit;
use crate::runtime::interpreter::Interpreter;

fn print_cell(interp: &mut Interpreter, _: &mut Tokenizer, out: &mut dyn Write) -> Result<()> {
    let value = interp.pop()?;
    let text = format_cell(value, interp.base as u32);
    write!(out, "{text} ").map_err(|_| InterpError::AllocationFailure)
}

fn print_stack(interp: &mut Interpreter, _: &mut Tokenizer, out: &mut dyn Write) -> Result<()> {
    write!(out, "< ").map_err(|_| InterpError::AllocationFailure)?;
    for value in interp.data_stack.iter() {
        write!(out, "{} ", format_cell(*value, interp.base as u32))
            .map_err(|_| InterpError::AllocationFailure)?;
    }
    write!(out, "> ").map_err(|_| InterpError::AllocationFailure)
}

fn cr(_: &mut Interpreter, _: &mut Tokenizer, out: &mut dyn Write) -> Result<()> {
    writeln!(out).map_err(|_| InterpError::AllocationFailure)
}

/// `."` ( — ): immediate so it can parse its string payload regardless of
/// mode. In interpret mode it prints right away; while compiling it
/// records the string as a `PrintLit` opcode, printed when the containing
/// word later runs.
fn print_literal(interp: &mut Interpreter, tokenizer: &mut Tokenizer, out: &mut dyn Write) -> Result<()> {
    let text = tokenizer
        .parse_string()
        .ok_or(InterpError::UnterminatedString)?;

    if interp.is_compiling() {
        emit_print_lit(interp, text)
    } else {
        write!(out, "{text}").map_err(|_| InterpError::AllocationFailure)
    }
}

pub static WORDS: &[PrimitiveSpec] = &[
    PrimitiveSpec { name: ".", immediate: false, handler: print_cell },
    PrimitiveSpec { name: ".s", immediate: false, handler: print_stack },
    PrimitiveSpec { name: "cr", immediate: false, handler: cr },
    PrimitiveSpec { name: ".\"", immediate: true, handler: print_literal },
];
