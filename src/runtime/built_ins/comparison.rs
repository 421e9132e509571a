//! `= < > <= >= <>` (`spec.md` §4.7 "Comparison"): push −1 on true, 0 on
//! false, following the truth convention in §3.

use std::io::Write;

use crate::lang::tokenizer::Tokenizer;
use crate::runtime::built_ins::PrimitiveSpec;
use crate::runtime::cell::bool_to_cell;
use crate::runtime::error::Result;
use crate::runtime::interpreter::Interpreter;

macro_rules! compare_op {
    ($name:ident, $op:tt) => {
        fn $name(interp: &mut Interpreter, _: &mut Tokenizer, _: &mut dyn Write) -> Result<()> {
            let b = interp.pop()?;
            let a = interp.pop()?;
            interp.push(bool_to_cell(a $op b))
        }
    };
}

compare_op!(eq, ==);
compare_op!(lt, <);
compare_op!(gt, >);
compare_op!(le, <=);
compare_op!(ge, >=);
compare_op!(ne, !=);

pub static WORDS: &[PrimitiveSpec] = &[
    PrimitiveSpec { name: "=", immediate: false, handler: eq },
    PrimitiveSpec { name: "<", immediate: false, handler: lt },
    PrimitiveSpec { name: ">", immediate: false, handler: gt },
    PrimitiveSpec { name: "<=", immediate: false, handler: le },
    PrimitiveSpec { name: ">=", immediate: false, handler: ge },
    PrimitiveSpec { name: "<>", immediate: false, handler: ne },
];
