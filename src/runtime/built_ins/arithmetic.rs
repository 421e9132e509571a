//! `+ - * / mod` (`spec.md` §4.7 "Arithmetic").

use std::io::Write;

use crate::runtime::built_ins::PrimitiveSpec;
use crate::runtime::error::{InterpError, Result};
use crate::runtime::interpreter::Interpreter;

macro_rules! binary_op {
    ($name:ident, $op:tt) => {
        fn $name(interp: &mut Interpreter, _: &mut crate::lang::tokenizer::Tokenizer, _: &mut dyn Write) -> Result<()> {
            let b = interp.pop()?;
            let a = interp.pop()?;
            interp.push(a $op b)
        }
    };
}

binary_op!(add, +);
binary_op!(sub, -);
binary_op!(mul, *);

fn div(interp: &mut Interpreter, _: &mut crate::lang::tokenizer::Tokenizer, _: &mut dyn Write) -> Result<()> {
    let b = interp.pop()?;
    let a = interp.pop()?;
    if b == 0 {
        return Err(InterpError::DivisionByZero);
    }
    interp.push(a / b)
}

fn rem(interp: &mut Interpreter, _: &mut crate::lang::tokenizer::Tokenizer, _: &mut dyn Write) -> Result<()> {
    let b = interp.pop()?;
    let a = interp.pop()?;
    if b == 0 {
        return Err(InterpError::DivisionByZero);
    }
    interp.push(a % b)
}

pub static WORDS: &[PrimitiveSpec] = &[
    PrimitiveSpec { name: "+", immediate: false, handler: add },
    PrimitiveSpec { name: "-", immediate: false, handler: sub },
    PrimitiveSpec { name: "*", immediate: false, handler: mul },
    PrimitiveSpec { name: "/", immediate: false, handler: div },
    PrimitiveSpec { name: "mod", immediate: false, handler: rem },
];
