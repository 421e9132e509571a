//! Threaded-code representation (`spec.md` §4.4, §9 REDESIGN FLAGS).
//!
//! The source interpreter this is distilled from packs opcodes as raw cells
//! with magic small-negative sentinels, leaving the executor to guess
//! whether a given cell is an opcode, an operand, or a pointer. That guess is
//! the fragility `spec.md` §9 calls out. Here the code vector is a sequence
//! of a tagged `Op`, so there is nothing to guess: the executor matches on
//! the variant.

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::runtime::cell::Cell;
use crate::runtime::dictionary::WordId;

/// A single instruction in a compiled word's code vector.
#[derive(Debug, Clone)]
pub enum Op {
    /// Push a constant cell.
    Lit(Cell),

    /// Print a string literal compiled by `."`. The only opcode whose
    /// payload isn't itself a `Cell` — `."`'s payload is text, and no other
    /// opcode needs to carry one.
    PrintLit(Rc<str>),

    /// Unconditionally advance the program counter by `offset`, relative to
    /// the position immediately after this instruction.
    Branch(i32),

    /// Pop the data stack; if zero, advance by `offset` (as `Branch`);
    /// otherwise fall through to the next instruction.
    ZBranch(i32),

    /// Pop *start* then *limit* off the data stack; push *limit* then
    /// *start* onto the return stack.
    Do,

    /// Increment the return stack's index; if still less than the limit,
    /// branch back by `offset`; otherwise pop both and fall through.
    Loop(i32),

    /// Execute the word this id refers to. `WordId` is a stable dictionary
    /// index, never a raw address, so there is no pointer/cell ambiguity.
    Call(WordId),
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Op::Lit(value) => write!(f, "lit    {value}"),
            Op::PrintLit(text) => write!(f, "\".\"    {text:?}"),
            Op::Branch(offset) => write!(f, "branch {offset:+}"),
            Op::ZBranch(offset) => write!(f, "0branch {offset:+}"),
            Op::Do => write!(f, "do"),
            Op::Loop(offset) => write!(f, "loop   {offset:+}"),
            Op::Call(word_id) => write!(f, "call   #{word_id}"),
        }
    }
}

/// The ordered sequence of instructions making up a compiled word's body.
pub type CodeVec = Vec<Op>;

/// Render a code vector one instruction per line, for debugging/tracing.
pub fn pretty_print(code: &CodeVec) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(code.len() * 12);
    for (index, op) in code.iter().enumerate() {
        writeln!(&mut out, "{index:4}: {op}").expect("writing to String never fails");
    }
    out
}
