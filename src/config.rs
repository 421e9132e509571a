//! Resource bounds fixed at startup (`spec.md` §5, `SPEC_FULL.md` §A.3).

use clap::Parser;

/// Capacities for every bounded resource the engine owns. None of these
/// change any operation's semantics, only the point at which the `…Full`/
/// `…Overflow` errors in `spec.md` §7 fire.
#[derive(Debug, Clone, Copy, Parser)]
#[command(
    name = "cellforth",
    about = "An interactive interpreter for a stack-based concatenative language."
)]
pub struct Config {
    /// Number of cells in the flat data memory arena.
    #[arg(long, default_value_t = 65536)]
    pub memory_size: usize,

    /// Maximum depth of the data stack.
    #[arg(long, default_value_t = 1024)]
    pub data_stack_capacity: usize,

    /// Maximum depth of the return stack.
    #[arg(long, default_value_t = 1024)]
    pub return_stack_capacity: usize,

    /// Maximum depth of the compile-time branch stack.
    #[arg(long, default_value_t = 256)]
    pub branch_stack_capacity: usize,

    /// Maximum number of words the dictionary can hold.
    #[arg(long, default_value_t = 4096)]
    pub dictionary_capacity: usize,

    /// Maximum number of opcodes in a single word's code vector.
    #[arg(long, default_value_t = 4096)]
    pub max_code_vector_len: usize,

    /// Maximum byte length of a word name or numeric token before it is
    /// truncated (`spec.md` §4.1).
    #[arg(long, default_value_t = 31)]
    pub max_name_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            memory_size: 65536,
            data_stack_capacity: 1024,
            return_stack_capacity: 1024,
            branch_stack_capacity: 256,
            dictionary_capacity: 4096,
            max_code_vector_len: 4096,
            max_name_len: 31,
        }
    }
}
