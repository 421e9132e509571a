//! Token reader (`spec.md` §4.1, §6 "Token grammar").

/// The result of reading one token: its (possibly truncated) text, and
/// whether truncation happened. Truncation is reported but not fatal
/// (`spec.md` §4.1) — the caller logs a warning and keeps going with the
/// truncated text rather than aborting the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRead {
    pub text: String,
    pub truncated: bool,
}

/// A cursor over the current input line. `next_token` skips leading
/// whitespace and returns the maximal run of non-whitespace; `parse_string`
/// implements the `."` word's rest-of-line string payload.
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
    max_len: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, max_len: usize) -> Self {
        Tokenizer {
            input: input.as_bytes(),
            pos: 0,
            max_len,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Read the next whitespace-terminated token, or `None` if the input is
    /// exhausted. The two-byte lexeme `."` is special-cased: if a token
    /// would start with those two bytes, exactly those two bytes are
    /// yielded and the cursor is left positioned right after them, even if
    /// more non-whitespace bytes immediately follow (`spec.md` §4.1).
    pub fn next_token(&mut self) -> Option<TokenRead> {
        self.skip_whitespace();

        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;

        if self.input[self.pos..].starts_with(b".\"") {
            self.pos += 2;
            return Some(TokenRead {
                text: ".\"".to_string(),
                truncated: false,
            });
        }

        while self.pos < self.input.len() && !self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }

        let raw = &self.input[start..self.pos];
        let truncated = raw.len() > self.max_len;
        let bytes = if truncated { &raw[..self.max_len] } else { raw };
        let text = String::from_utf8_lossy(bytes).into_owned();

        Some(TokenRead { text, truncated })
    }

    /// `."`'s string payload: skip exactly one byte (the space mandated by
    /// convention right after `."`), then read until the next `"`, which is
    /// consumed. Fails with `None` if no closing quote is found.
    pub fn parse_string(&mut self) -> Option<String> {
        if self.pos < self.input.len() {
            self.pos += 1;
        }

        let start = self.pos;
        while self.pos < self.input.len() && self.input[self.pos] != b'"' {
            self.pos += 1;
        }

        if self.pos >= self.input.len() {
            return None;
        }

        let text = String::from_utf8_lossy(&self.input[start..self.pos]).into_owned();
        self.pos += 1; // consume the closing quote
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<String> {
        let mut tokenizer = Tokenizer::new(input, 31);
        let mut out = Vec::new();
        while let Some(tok) = tokenizer.next_token() {
            out.push(tok.text);
        }
        out
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokens("1 2 +"), vec!["1", "2", "+"]);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(tokens("  1    2\t+  "), vec!["1", "2", "+"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokens(""), Vec::<String>::new());
        assert_eq!(tokens("   "), Vec::<String>::new());
    }

    #[test]
    fn dot_quote_is_its_own_two_byte_token() {
        let mut tokenizer = Tokenizer::new(".\" hello\" cr", 31);
        let first = tokenizer.next_token().unwrap();
        assert_eq!(first.text, ".\"");
        let payload = tokenizer.parse_string().unwrap();
        assert_eq!(payload, "hello");
        let next = tokenizer.next_token().unwrap();
        assert_eq!(next.text, "cr");
    }

    #[test]
    fn dot_quote_splits_off_even_without_a_separating_space() {
        // `."hello"` — the two-byte lexeme still wins over the longer run.
        let mut tokenizer = Tokenizer::new(".\"hello\"", 31);
        let first = tokenizer.next_token().unwrap();
        assert_eq!(first.text, ".\"");
    }

    #[test]
    fn unterminated_string_is_reported() {
        let mut tokenizer = Tokenizer::new(".\" hello", 31);
        tokenizer.next_token().unwrap();
        assert_eq!(tokenizer.parse_string(), None);
    }

    #[test]
    fn long_tokens_are_truncated_and_flagged() {
        let long = "x".repeat(40);
        let mut tokenizer = Tokenizer::new(&long, 31);
        let tok = tokenizer.next_token().unwrap();
        assert_eq!(tok.text.len(), 31);
        assert!(tok.truncated);
    }
}
