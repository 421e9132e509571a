//! `variable constant create` (`spec.md` §4.7 "Defining words"). Each
//! parses a name straight off the tokenizer and installs a word whose body
//! is a single `Lit` — no new dictionary kind is needed since "pushes a
//! fixed address/value" is exactly what a one-instruction compiled word
//! already does.

use std::io::Write;

use crate::lang::code::Op;
use crate::lang::tokenizer::Tokenizer;
use crate::runtime::built_ins::PrimitiveSpec;
use crate::runtime::dictionary::WordRecord;
use crate::runtime::error::{InterpError, Result};
use crate::runtime::interpreter::Interpreter;

fn parse_name(tokenizer: &mut Tokenizer, defining_word: &'static str) -> Result<String> {
    tokenizer
        .next_token()
        .map(|token| token.text)
        .ok_or(InterpError::UnmatchedControlWord(defining_word))
}

fn variable(interp: &mut Interpreter, tokenizer: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let name = parse_name(tokenizer, "variable")?;
    let addr = interp.memory.reserve(1)?;
    interp
        .dictionary
        .add(WordRecord::compiled(name, vec![Op::Lit(addr as i64)]))?;
    Ok(())
}

fn constant(interp: &mut Interpreter, tokenizer: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let name = parse_name(tokenizer, "constant")?;
    let value = interp.pop()?;
    interp
        .dictionary
        .add(WordRecord::compiled(name, vec![Op::Lit(value)]))?;
    Ok(())
}

fn create(interp: &mut Interpreter, tokenizer: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let name = parse_name(tokenizer, "create")?;
    let addr = interp.memory.here();
    interp
        .dictionary
        .add(WordRecord::compiled(name, vec![Op::Lit(addr as i64)]))?;
    Ok(())
}

pub static WORDS: &[PrimitiveSpec] = &[
    PrimitiveSpec { name: "variable", immediate: false, handler: variable },
    PrimitiveSpec { name: "constant", immediate: false, handler: constant },
    PrimitiveSpec { name: "create", immediate: false, handler: create },
];
