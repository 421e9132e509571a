//! The dictionary of defined words (`spec.md` §3 "Word record", §4.2).

use crate::lang::code::CodeVec;
use crate::runtime::error::{InterpError, Result};
use crate::runtime::interpreter::PrimitiveFn;

/// A stable index into the dictionary. Used by `Op::Call` instead of a raw
/// address (`spec.md` §9's "WordId is a stable index into the dictionary
/// rather than a raw address").
pub type WordId = usize;

/// How a word is executed once found.
#[derive(Clone)]
pub enum WordKind {
    /// A built-in implemented in Rust. Function pointers are trivially
    /// `Copy`, so there is no need for a separate "primitive id" table
    /// indirection — the handler lives right here.
    Primitive(PrimitiveFn),

    /// A user-defined word: the code vector compiled between `:` and `;`.
    Compiled(CodeVec),
}

/// Everything the dictionary keeps about one word.
#[derive(Clone)]
pub struct WordRecord {
    pub name: String,

    /// Runs even while the interpreter is compiling (`spec.md` §3, §4.6).
    pub immediate: bool,

    pub kind: WordKind,
}

impl WordRecord {
    pub fn primitive(name: String, immediate: bool, handler: PrimitiveFn) -> Self {
        WordRecord {
            name,
            immediate,
            kind: WordKind::Primitive(handler),
        }
    }

    pub fn compiled(name: String, code: CodeVec) -> Self {
        WordRecord {
            name,
            immediate: false,
            kind: WordKind::Compiled(code),
        }
    }
}

/// Append-only ordered collection of word records (`spec.md` §4.2).
///
/// No scoped sub-contexts of words that can be released together — that
/// would need "dynamic dictionary shrinking" and "garbage collection of
/// definitions", both explicit Non-goals in `spec.md` §1. A single flat,
/// append-only `Vec` with a linear most-recent-first scan is both simpler
/// and a literal match for `spec.md` §4.2's wording.
pub struct Dictionary {
    words: Vec<WordRecord>,
    capacity: usize,
}

impl Dictionary {
    pub fn new(capacity: usize) -> Self {
        Dictionary {
            words: Vec::new(),
            capacity,
        }
    }

    /// Linear scan from the most recently added word backwards, so a
    /// redefinition (were one ever permitted) would shadow the original.
    /// `spec.md` §4.2 requires duplicates to be rejected at `add`, so in
    /// practice there is never more than one record per name; the
    /// most-recent-wins scan order is a defensive tiebreak only.
    pub fn find(&self, name: &str) -> Option<WordId> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, word)| word.name == name)
            .map(|(id, _)| id)
    }

    pub fn get(&self, id: WordId) -> Option<&WordRecord> {
        self.words.get(id)
    }

    /// Insert a new word. Rejects a name already present (`spec.md` §3
    /// invariant: "every word's name is ... unique within the dictionary at
    /// the moment of insertion").
    pub fn add(&mut self, record: WordRecord) -> Result<WordId> {
        if self.find(&record.name).is_some() {
            return Err(InterpError::DuplicateWord(record.name));
        }

        if self.words.len() >= self.capacity {
            return Err(InterpError::DictionaryFull);
        }

        let id = self.words.len();
        self.words.push(record);
        Ok(id)
    }

    /// Remove `id` only if it is still the last entry — i.e. nothing has
    /// been added since it was reserved. Used exclusively to undo a `:`
    /// reservation when its definition aborts with an error before reaching
    /// `;` (`spec.md` §7: "the partially compiled word ... is discarded
    /// before the next token"). This is not general redefinition or
    /// garbage collection (both explicit Non-goals) — it only ever retracts
    /// the one entry the aborted compile itself just reserved.
    pub fn retract_if_last(&mut self, id: WordId) {
        if self.words.len() == id + 1 {
            self.words.pop();
        }
    }

    /// Overwrite a previously reserved word's code vector. Used to fill in
    /// the body of a definition whose header was reserved at `:` time (so
    /// that a self-recursive call inside the body resolves to its own,
    /// already-assigned `WordId` — `spec.md` §4.5 and §4.8's "self-recursive
    /// definitions are allowed syntactically").
    pub fn set_code(&mut self, id: WordId, code: CodeVec) {
        match &mut self
            .words
            .get_mut(id)
            .expect("set_code called with a valid id")
            .kind
        {
            WordKind::Compiled(slot) => *slot = code,
            WordKind::Primitive(_) => panic!("set_code called on a primitive word"),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(
        _: &mut crate::runtime::interpreter::Interpreter,
        _: &mut crate::lang::tokenizer::Tokenizer,
        _: &mut dyn std::io::Write,
    ) -> Result<()> {
        Ok(())
    }

    #[test]
    fn add_then_find_round_trips() {
        let mut dict = Dictionary::new(8);
        let id = dict
            .add(WordRecord::primitive("dup".to_string(), false, noop))
            .unwrap();
        assert_eq!(dict.find("dup"), Some(id));
        assert_eq!(dict.find("nope"), None);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut dict = Dictionary::new(8);
        dict.add(WordRecord::primitive("foo".to_string(), false, noop))
            .unwrap();
        let err = dict
            .add(WordRecord::primitive("foo".to_string(), false, noop))
            .unwrap_err();
        assert_eq!(err, InterpError::DuplicateWord("foo".to_string()));
        // The original definition must survive the rejected insert.
        assert!(dict.find("foo").is_some());
    }

    #[test]
    fn full_dictionary_reports_dictionary_full() {
        let mut dict = Dictionary::new(1);
        dict.add(WordRecord::primitive("a".to_string(), false, noop))
            .unwrap();
        let err = dict
            .add(WordRecord::primitive("b".to_string(), false, noop))
            .unwrap_err();
        assert_eq!(err, InterpError::DictionaryFull);
    }
}
