//! The interpreter's execution engine: the explicit context object every
//! operation is threaded through (`spec.md` §9), and the top-level REPL
//! dispatch between interpret and compile mode (`spec.md` §3, §4.5).

pub mod compiler;
pub mod executor;

use std::io::Write;

use crate::config::Config;
use crate::lang::tokenizer::Tokenizer;
use crate::runtime::cell::{parse_cell, Cell};
use crate::runtime::dictionary::Dictionary;
use crate::runtime::error::{InterpError, Result};
use crate::runtime::memory::Memory;
use crate::runtime::stack::BoundedStack;

pub use compiler::{BranchKind, BranchRecord, CompileState};

/// The signature every built-in word is registered under. It receives the
/// interpreter context, the tokenizer for the line currently being
/// processed (input-parsing words like `variable`/`create`/`."` read the
/// next token or raw text straight off of it), and the output sink printed
/// words write to.
pub type PrimitiveFn =
    for<'a> fn(&mut Interpreter, &mut Tokenizer<'a>, &mut dyn Write) -> Result<()>;

/// Which of the two REPL dispatch modes the interpreter is currently in
/// (`spec.md` §3 "Interpreter state").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interpreting,
    Compiling,
}

/// All process-wide state for one interpreter session (`spec.md` §5: "All
/// state is process-wide and exclusively owned by the interpreter
/// session").
pub struct Interpreter {
    pub dictionary: Dictionary,
    pub memory: Memory,
    pub data_stack: BoundedStack<Cell>,
    pub return_stack: BoundedStack<Cell>,
    pub branch_stack: BoundedStack<BranchRecord>,

    /// Numeric base used for parsing and for `.`/`.s` output (`spec.md`
    /// §3). Part of interpreter state per the data model, though this core
    /// pre-defines no word that mutates it (`spec.md` §6 "No other names
    /// are pre-defined" — see DESIGN.md).
    pub base: Cell,

    mode: Mode,
    compiling: Option<CompileState>,
    config: Config,
}

impl Interpreter {
    pub fn new(config: Config) -> Self {
        Interpreter {
            dictionary: Dictionary::new(config.dictionary_capacity),
            memory: Memory::new(config.memory_size),
            data_stack: BoundedStack::new(config.data_stack_capacity),
            return_stack: BoundedStack::new(config.return_stack_capacity),
            branch_stack: BoundedStack::new(config.branch_stack_capacity),
            base: 10,
            mode: Mode::Interpreting,
            compiling: None,
            config,
        }
    }

    pub fn is_compiling(&self) -> bool {
        matches!(self.mode, Mode::Compiling)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // -- Data stack --------------------------------------------------

    pub fn push(&mut self, value: Cell) -> Result<()> {
        self.data_stack
            .push(value)
            .ok_or(InterpError::StackOverflow)
    }

    pub fn pop(&mut self) -> Result<Cell> {
        self.data_stack.pop().ok_or(InterpError::StackUnderflow)
    }

    pub fn peek(&self) -> Result<Cell> {
        self.data_stack
            .peek(0)
            .copied()
            .ok_or(InterpError::StackUnderflow)
    }

    // -- Return stack --------------------------------------------------

    pub fn push_return(&mut self, value: Cell) -> Result<()> {
        self.return_stack
            .push(value)
            .ok_or(InterpError::ReturnStackOverflow)
    }

    pub fn pop_return(&mut self) -> Result<Cell> {
        self.return_stack
            .pop()
            .ok_or(InterpError::ReturnStackUnderflow)
    }

    pub fn peek_return(&self, n: usize) -> Result<Cell> {
        self.return_stack
            .peek(n)
            .copied()
            .ok_or(InterpError::ReturnStackUnderflow)
    }

    /// Reset all transient state to the idle interpret-mode baseline
    /// (`spec.md` §7 recovery policy). Called once for every error that
    /// reaches the REPL. Any definition whose header was reserved but never
    /// sealed is retracted, so the aborted name is free to be redefined.
    pub fn reset_to_idle(&mut self) {
        self.data_stack.clear();
        self.return_stack.clear();
        self.branch_stack.clear();
        if let Some(state) = self.compiling.take() {
            self.dictionary.retract_if_last(state.id);
        }
        self.mode = Mode::Interpreting;
    }

    /// Process one input line: tokenize it and dispatch every token through
    /// interpret or compile mode until the line is exhausted or an error
    /// occurs. On error, all transient state is reset to the idle baseline
    /// before the error is returned, per `spec.md` §7.
    pub fn eval_line(&mut self, line: &str, out: &mut dyn Write) -> Result<()> {
        let mut tokenizer = Tokenizer::new(line, self.config.max_name_len);

        let result = (|| {
            while let Some(token) = tokenizer.next_token() {
                if token.truncated {
                    let err = InterpError::TokenTooLong(token.text.clone());
                    tracing::warn!(%err, "reportable, non-fatal: continuing with the truncated token");
                }

                self.dispatch_token(&token.text, &mut tokenizer, out)?;
            }
            Ok(())
        })();

        if let Err(err) = &result {
            tracing::debug!(error = %err, "resetting to idle baseline after error");
            self.reset_to_idle();
        }

        result
    }

    fn dispatch_token(
        &mut self,
        text: &str,
        tokenizer: &mut Tokenizer,
        out: &mut dyn Write,
    ) -> Result<()> {
        match self.mode {
            Mode::Interpreting => self.interpret_token(text, tokenizer, out),
            Mode::Compiling => self.compile_token(text, tokenizer, out),
        }
    }

    /// Interpret-mode dispatch (`spec.md` §4.3): a known word executes
    /// immediately regardless of its `immediate` flag (that flag only
    /// changes behavior while compiling); an unknown token is parsed as a
    /// number in the current base, or reported as `UnknownWord`.
    fn interpret_token(
        &mut self,
        text: &str,
        tokenizer: &mut Tokenizer,
        out: &mut dyn Write,
    ) -> Result<()> {
        if let Some(word_id) = self.dictionary.find(text) {
            return executor::execute_word(self, tokenizer, out, word_id);
        }

        match parse_cell(text, self.base as u32) {
            Some(value) => self.push(value),
            None => Err(InterpError::UnknownWord(text.to_string())),
        }
    }
}
