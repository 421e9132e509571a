//! `! @ cells allot` (`spec.md` §4.7 "Memory").

use std::io::Write;
use std::mem::size_of;

use crate::lang::tokenizer::Tokenizer;
use crate::runtime::built_ins::PrimitiveSpec;
use crate::runtime::cell::{Address, Cell};
use crate::runtime::error::{InterpError, Result};
use crate::runtime::interpreter::Interpreter;

fn store(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let addr = interp.pop()?;
    let value = interp.pop()?;
    let addr = to_address(addr)?;
    interp.memory.store(addr, value)
}

fn fetch(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let addr = interp.pop()?;
    let addr = to_address(addr)?;
    let value = interp.memory.fetch(addr)?;
    interp.push(value)
}

fn cells(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let n = interp.pop()?;
    interp.push(n * size_of::<Cell>() as Cell)
}

fn allot(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let n = interp.pop()?;
    interp.memory.allot(n)
}

fn to_address(value: Cell) -> Result<Address> {
    if value < 0 {
        return Err(InterpError::InvalidAddress(value));
    }
    Ok(value as Address)
}

pub static WORDS: &[PrimitiveSpec] = &[
    PrimitiveSpec { name: "!", immediate: false, handler: store },
    PrimitiveSpec { name: "@", immediate: false, handler: fetch },
    PrimitiveSpec { name: "cells", immediate: false, handler: cells },
    PrimitiveSpec { name: "allot", immediate: false, handler: allot },
];
