//! `and`, `or`, `not` (`spec.md` §4.7 "Bitwise").

use std::io::Write;

use crate::lang::tokenizer::Tokenizer;
use crate::runtime::built_ins::PrimitiveSpec;
use crate::runtime::error::Result;
use crate::runtime::interpreter::Interpreter;

fn and(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let b = interp.pop()?;
    let a = interp.pop()?;
    interp.push(a & b)
}

fn or(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let b = interp.pop()?;
    let a = interp.pop()?;
    interp.push(a | b)
}

fn not(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let a = interp.pop()?;
    interp.push(!a)
}

pub static WORDS: &[PrimitiveSpec] = &[
    PrimitiveSpec { name: "and", immediate: false, handler: and },
    PrimitiveSpec { name: "or", immediate: false, handler: or },
    PrimitiveSpec { name: "not", immediate: false, handler: not },
];
