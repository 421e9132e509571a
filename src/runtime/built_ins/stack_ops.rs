//! `dup drop swap over rot nip tuck` (`spec.md` §4.7 "Stack").

use std::io::Write;

use crate::lang::tokenizer::Tokenizer;
use crate::runtime::built_ins::PrimitiveSpec;
use crate::runtime::error::Result;
use crate::runtime::interpreter::Interpreter;

fn dup(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let a = interp.peek()?;
    interp.push(a)
}

fn drop_(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    interp.pop()?;
    Ok(())
}

fn swap(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let b = interp.pop()?;
    let a = interp.pop()?;
    interp.push(b)?;
    interp.push(a)
}

fn over(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let b = interp.pop()?;
    let a = interp.pop()?;
    interp.push(a)?;
    interp.push(b)?;
    interp.push(a)
}

fn rot(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let c = interp.pop()?;
    let b = interp.pop()?;
    let a = interp.pop()?;
    interp.push(b)?;
    interp.push(c)?;
    interp.push(a)
}

fn nip(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let b = interp.pop()?;
    interp.pop()?;
    interp.push(b)
}

fn tuck(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let b = interp.pop()?;
    let a = interp.pop()?;
    interp.push(b)?;
    interp.push(a)?;
    interp.push(b)
}

pub static WORDS: &[PrimitiveSpec] = &[
    PrimitiveSpec { name: "dup", immediate: false, handler: dup },
    PrimitiveSpec { name: "drop", immediate: false, handler: drop_ },
    PrimitiveSpec { name: "swap", immediate: false, handler: swap },
    PrimitiveSpec { name: "over", immediate: false, handler: over },
    PrimitiveSpec { name: "rot", immediate: false, handler: rot },
    PrimitiveSpec { name: "nip", immediate: false, handler: nip },
    PrimitiveSpec { name: "tuck", immediate: false, handler: tuck },
];
