//! Compile-mode dispatch and the back-patching machinery behind every
//! control-flow word (`spec.md` §4.5, §4.6).

use std::io::Write;
use std::rc::Rc;

use crate::lang::code::{CodeVec, Op};
use crate::lang::tokenizer::Tokenizer;
use crate::runtime::cell::parse_cell;
use crate::runtime::dictionary::{WordId, WordKind, WordRecord};
use crate::runtime::error::{InterpError, Result};
use crate::runtime::interpreter::{Interpreter, Mode};

/// Which control-flow word pushed a given entry onto the branch stack. The
/// closing word of each pair looks at the top entry's kind to decide how to
/// patch it and whether it matches (`spec.md` §4.6's table, column "closed
/// by").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    If,
    Else,
    Begin,
    While,
    Do,
}

/// One pending back-patch: the code-vector slot whose offset is still
/// unknown, and which opener put it there.
#[derive(Debug, Clone, Copy)]
pub struct BranchRecord {
    pub slot: usize,
    pub kind: BranchKind,
}

/// Everything in flight while a `:`/`;` definition is being compiled. `id`
/// is reserved in the dictionary as soon as `:` parses the name, so a
/// self-recursive call inside the body can already resolve to it.
pub struct CompileState {
    pub id: WordId,
    pub code: CodeVec,
}

impl Interpreter {
    /// Index the next emitted instruction will occupy.
    pub(crate) fn here(&self) -> usize {
        self.compiling
            .as_ref()
            .map(|state| state.code.len())
            .unwrap_or(0)
    }

    /// Append an instruction to the word currently being compiled, enforcing
    /// the configured code-vector length bound.
    pub(crate) fn emit(&mut self, op: Op) -> Result<()> {
        let max_len = self.config().max_code_vector_len;
        let state = self
            .compiling
            .as_mut()
            .expect("emit called while not compiling");

        if state.code.len() >= max_len {
            return Err(InterpError::CodeBufferOverflow);
        }

        state.code.push(op);
        Ok(())
    }

    /// Overwrite the offset embedded in a previously emitted `Branch`,
    /// `ZBranch`, or `Loop` at `slot`, computed relative to the instruction
    /// immediately after `slot` — `spec.md` §4.6's uniform offset
    /// convention, so every control word can share one formula:
    /// `offset = target - (slot + 1)`.
    pub(crate) fn patch(&mut self, slot: usize, target: usize) -> Result<()> {
        let offset = target as i64 - (slot as i64 + 1);
        let offset = offset as i32;

        let state = self
            .compiling
            .as_mut()
            .expect("patch called while not compiling");

        match state.code.get_mut(slot) {
            Some(Op::Branch(value)) => *value = offset,
            Some(Op::ZBranch(value)) => *value = offset,
            Some(Op::Loop(value)) => *value = offset,
            _ => panic!("patch target is not a branching instruction"),
        }

        Ok(())
    }

    pub(crate) fn push_branch(&mut self, slot: usize, kind: BranchKind) -> Result<()> {
        self.branch_stack
            .push(BranchRecord { slot, kind })
            .ok_or(InterpError::BranchStackOverflow)
    }

    pub(crate) fn pop_branch(&mut self) -> Result<BranchRecord> {
        self.branch_stack
            .pop()
            .ok_or(InterpError::BranchStackUnderflow)
    }

    /// Expect the top of the branch stack to be one of `kinds`; pop and
    /// return it, or report `UnmatchedControlWord(closing)` if the top is
    /// something else (or the stack is empty).
    pub(crate) fn expect_branch(
        &mut self,
        kinds: &[BranchKind],
        closing: &'static str,
    ) -> Result<BranchRecord> {
        match self.branch_stack.peek(0) {
            Some(record) if kinds.contains(&record.kind) => self.pop_branch(),
            _ => Err(InterpError::UnmatchedControlWord(closing)),
        }
    }

    /// Begin compiling a new definition (`:`). Rejects nested `:` — this
    /// core has no notion of compiling one word's body from inside another
    /// (`spec.md` §4.5, and DESIGN.md's Open Question decision on nested
    /// `:`). The name is reserved in the dictionary immediately (`spec.md`
    /// §4.5: "allocate a new Word record, read the next token as its name,
    /// reject if the name already exists"), with an empty placeholder body,
    /// so a self-recursive call compiles to a `Call` of its own id.
    pub fn begin_compile(&mut self, name: String) -> Result<()> {
        if self.is_compiling() {
            return Err(InterpError::UnmatchedControlWord(":"));
        }

        let id = self.dictionary.add(WordRecord::compiled(name, Vec::new()))?;
        self.compiling = Some(CompileState {
            id,
            code: Vec::new(),
        });
        self.mode = Mode::Compiling;
        Ok(())
    }

    /// Finish the current definition (`;`), filling in the reserved
    /// dictionary entry's body. Fails if any control structure was left
    /// unclosed.
    pub fn seal_compile(&mut self) -> Result<()> {
        if !self.branch_stack.is_empty() {
            // Leave `compiling` in place so the caller's error path (via
            // `reset_to_idle`) retracts the reserved-but-unsealed word.
            return Err(InterpError::UnclosedControlStructure);
        }

        let state = self.compiling.take().expect("seal_compile while idle");
        self.mode = Mode::Interpreting;

        tracing::debug!(word_id = state.id, ops = state.code.len(), "defined word");
        self.dictionary.set_code(state.id, state.code);
        Ok(())
    }

    /// Compile-mode dispatch (`spec.md` §4.5): immediate words (control
    /// words, and `;`) run right away even while compiling; everything else
    /// known is compiled as a `Call`; an unknown token is parsed as a
    /// number and compiled as a `Lit`, or reported as `UnknownWord`.
    pub(crate) fn compile_token(
        &mut self,
        text: &str,
        tokenizer: &mut Tokenizer,
        out: &mut dyn Write,
    ) -> Result<()> {
        if let Some(word_id) = self.dictionary.find(text) {
            let record = self.dictionary.get(word_id).expect("id just looked up");

            if record.immediate {
                return match record.kind.clone() {
                    WordKind::Primitive(handler) => handler(self, tokenizer, out),
                    WordKind::Compiled(_) => {
                        // Compiled words are never marked immediate by this
                        // core's built-ins, but nothing prevents a future
                        // one from defining one — run it directly, same as
                        // a primitive, rather than compiling a call to it.
                        crate::runtime::interpreter::executor::execute_word(
                            self, tokenizer, out, word_id,
                        )
                    }
                };
            }

            return self.emit(Op::Call(word_id));
        }

        match parse_cell(text, self.base as u32) {
            Some(value) => self.emit(Op::Lit(value)),
            None => Err(InterpError::UnknownWord(text.to_string())),
        }
    }
}

/// Compile a `."`-style string literal's print opcode. Shared by the `."`
/// built-in so the `Rc<str>` construction lives in one place.
pub(crate) fn emit_print_lit(interp: &mut Interpreter, text: String) -> Result<()> {
    interp.emit(Op::PrintLit(Rc::from(text)))
}
