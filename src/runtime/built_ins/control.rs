//! `: ; if else then begin until while repeat do loop` (`spec.md` §4.5,
//! §4.6), plus the loop-introspection words `i`/`j` (`spec.md` §4.7). The
//! defining and control-flow words are all immediate and only make sense
//! while compiling, so each checks `is_compiling()` first and reports
//! `ImmediateOnly` otherwise — `spec.md` §7's name for "a control word used
//! outside compile mode." `i`/`j` are ordinary (non-immediate) words run at
//! loop-body execution time, not compile time.

use std::io::Write;

use crate::lang::code::Op;
use crate::lang::tokenizer::Tokenizer;
use crate::runtime::built_ins::PrimitiveSpec;
use crate::runtime::error::{InterpError, Result};
use crate::runtime::interpreter::{BranchKind, Interpreter};

fn colon(interp: &mut Interpreter, tokenizer: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let name = tokenizer
        .next_token()
        .map(|token| token.text)
        .ok_or(InterpError::UnmatchedControlWord(":"))?;
    interp.begin_compile(name)
}

fn semicolon(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    if !interp.is_compiling() {
        return Err(InterpError::CompileOnly(";"));
    }
    interp.seal_compile()
}

fn if_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    require_compiling(interp, "if")?;
    let slot = interp.here();
    interp.emit(Op::ZBranch(0))?;
    interp.push_branch(slot, BranchKind::If)
}

fn else_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    require_compiling(interp, "else")?;
    let opening = interp.expect_branch(&[BranchKind::If], "else")?;

    let slot = interp.here();
    interp.emit(Op::Branch(0))?;
    interp.patch(opening.slot, interp.here())?;
    interp.push_branch(slot, BranchKind::Else)
}

fn then_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    require_compiling(interp, "then")?;
    let opening = interp.expect_branch(&[BranchKind::If, BranchKind::Else], "then")?;
    interp.patch(opening.slot, interp.here())
}

fn begin_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    require_compiling(interp, "begin")?;
    let slot = interp.here();
    interp.push_branch(slot, BranchKind::Begin)
}

fn until_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    require_compiling(interp, "until")?;
    let opening = interp.expect_branch(&[BranchKind::Begin], "until")?;
    let slot = interp.here();
    interp.emit(Op::ZBranch(0))?;
    interp.patch(slot, opening.slot)
}

fn while_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    require_compiling(interp, "while")?;
    let opening = interp.expect_branch(&[BranchKind::Begin], "while")?;

    // `while` keeps the BEGIN entry alive underneath its own — `repeat`
    // needs both. Push BEGIN back before pushing WHILE on top of it.
    interp.push_branch(opening.slot, BranchKind::Begin)?;
    let slot = interp.here();
    interp.emit(Op::ZBranch(0))?;
    interp.push_branch(slot, BranchKind::While)
}

fn repeat_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    require_compiling(interp, "repeat")?;
    let while_entry = interp.expect_branch(&[BranchKind::While], "repeat")?;
    let begin_entry = interp.expect_branch(&[BranchKind::Begin], "repeat")?;

    let slot = interp.here();
    interp.emit(Op::Branch(0))?;
    interp.patch(slot, begin_entry.slot)?;
    interp.patch(while_entry.slot, interp.here())
}

fn do_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    require_compiling(interp, "do")?;
    interp.emit(Op::Do)?;
    let slot = interp.here();
    interp.push_branch(slot, BranchKind::Do)
}

fn loop_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    require_compiling(interp, "loop")?;
    let opening = interp.expect_branch(&[BranchKind::Do], "loop")?;
    let slot = interp.here();
    interp.emit(Op::Loop(0))?;
    interp.patch(slot, opening.slot)
}

/// `i` ( — n ): the innermost active `do` loop's current index, which
/// `Do`/`Loop` keep on top of the return stack (`src/runtime/interpreter/
/// executor.rs`: limit below, index on top).
fn i_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let index = interp.peek_return(0)?;
    interp.push(index)
}

/// `j` ( — n ): the next loop out's index, two return-stack slots below the
/// innermost index (the innermost loop's own limit sits in between).
fn j_word(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
    let index = interp.peek_return(2)?;
    interp.push(index)
}

fn require_compiling(interp: &Interpreter, name: &'static str) -> Result<()> {
    if interp.is_compiling() {
        Ok(())
    } else {
        Err(InterpError::ImmediateOnly(name))
    }
}

pub static WORDS: &[PrimitiveSpec] = &[
    PrimitiveSpec { name: ":", immediate: true, handler: colon },
    PrimitiveSpec { name: ";", immediate: true, handler: semicolon },
    PrimitiveSpec { name: "if", immediate: true, handler: if_word },
    PrimitiveSpec { name: "else", immediate: true, handler: else_word },
    PrimitiveSpec { name: "then", immediate: true, handler: then_word },
    PrimitiveSpec { name: "begin", immediate: true, handler: begin_word },
    PrimitiveSpec { name: "until", immediate: true, handler: until_word },
    PrimitiveSpec { name: "while", immediate: true, handler: while_word },
    PrimitiveSpec { name: "repeat", immediate: true, handler: repeat_word },
    PrimitiveSpec { name: "do", immediate: true, handler: do_word },
    PrimitiveSpec { name: "loop", immediate: true, handler: loop_word },
    PrimitiveSpec { name: "i", immediate: false, handler: i_word },
    PrimitiveSpec { name: "j", immediate: false, handler: j_word },
];
