//! Property-based coverage over the primitive stack effects and the
//! numeric parser/printer (`spec.md` §8: "property-based over all
//! primitives").

use cellforth::config::Config;
use cellforth::runtime::built_ins::register_built_ins;
use cellforth::runtime::cell::{format_cell, parse_cell};
use cellforth::runtime::interpreter::Interpreter;
use proptest::prelude::*;

fn fresh_interpreter() -> Interpreter {
    let mut interp = Interpreter::new(Config::default());
    register_built_ins(&mut interp).unwrap();
    interp
}

fn run(interp: &mut Interpreter, line: &str) {
    let mut out = Vec::new();
    interp.eval_line(line, &mut out).unwrap();
}

proptest! {
    /// `+` and `*` never care which operand came from where, so pushing
    /// them in either order must leave the same result on the stack.
    #[test]
    fn addition_and_multiplication_are_commutative(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let mut forward = fresh_interpreter();
        run(&mut forward, &format!("{a} {b} +"));
        let mut backward = fresh_interpreter();
        run(&mut backward, &format!("{b} {a} +"));
        prop_assert_eq!(forward.pop().unwrap(), backward.pop().unwrap());

        let mut forward = fresh_interpreter();
        run(&mut forward, &format!("{a} {b} *"));
        let mut backward = fresh_interpreter();
        run(&mut backward, &format!("{b} {a} *"));
        prop_assert_eq!(forward.pop().unwrap(), backward.pop().unwrap());
    }

    /// `dup` always grows the stack by exactly one and copies the top.
    #[test]
    fn dup_duplicates_the_top_without_disturbing_the_rest(values in prop::collection::vec(-1000i64..1000, 1..8)) {
        let mut interp = fresh_interpreter();
        let line: String = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        run(&mut interp, &format!("{line} dup"));

        prop_assert_eq!(interp.data_stack.len(), values.len() + 1);
        prop_assert_eq!(interp.pop().unwrap(), *values.last().unwrap());
        prop_assert_eq!(interp.pop().unwrap(), *values.last().unwrap());
    }

    /// `swap` is its own inverse.
    #[test]
    fn swap_twice_is_the_identity(a in any::<i64>(), b in any::<i64>()) {
        let mut interp = fresh_interpreter();
        run(&mut interp, &format!("{a} {b} swap swap"));
        prop_assert_eq!(interp.pop().unwrap(), b);
        prop_assert_eq!(interp.pop().unwrap(), a);
    }

    /// `drop` always shrinks the stack by exactly one, regardless of value.
    #[test]
    fn drop_shrinks_the_stack_by_one(values in prop::collection::vec(any::<i64>(), 1..8)) {
        let mut interp = fresh_interpreter();
        let line: String = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        run(&mut interp, &format!("{line} drop"));
        prop_assert_eq!(interp.data_stack.len(), values.len() - 1);
    }

    /// A stored cell always reads back unchanged, for any address `!`/`@`
    /// actually reach (`spec.md` §4.7's memory words). The default arena is
    /// large enough that no `allot` is needed to make these addresses valid.
    #[test]
    fn store_then_fetch_round_trips(addr in 0i64..1000, value in any::<i64>()) {
        let mut interp = fresh_interpreter();
        run(&mut interp, &format!("{value} {addr} !"));
        run(&mut interp, &format!("{addr} @"));
        prop_assert_eq!(interp.pop().unwrap(), value);
    }

    /// Formatting a cell in a given base and parsing it back in the same
    /// base must reproduce the original value, for every supported base.
    #[test]
    fn format_then_parse_round_trips(value in any::<i64>(), base in 2u32..=36) {
        let printed = format_cell(value, base);
        prop_assert_eq!(parse_cell(&printed, base), Some(value));
    }

    /// `=` is reflexive: any value compared against itself is true.
    #[test]
    fn equality_is_reflexive(value in any::<i64>()) {
        let mut interp = fresh_interpreter();
        run(&mut interp, &format!("{value} {value} ="));
        prop_assert_eq!(interp.pop().unwrap(), -1);
    }

    /// `over` always copies the second-from-top element to the new top,
    /// leaving the original three-deep relationship otherwise undisturbed.
    #[test]
    fn over_copies_the_second_element(a in any::<i64>(), b in any::<i64>()) {
        let mut interp = fresh_interpreter();
        run(&mut interp, &format!("{a} {b} over"));
        prop_assert_eq!(interp.pop().unwrap(), a);
        prop_assert_eq!(interp.pop().unwrap(), b);
        prop_assert_eq!(interp.pop().unwrap(), a);
    }
}
