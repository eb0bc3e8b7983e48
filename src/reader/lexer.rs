//! Primitive tokens of the smodels format.
//!
//! The format is a sequence of unsigned decimal numbers separated by whitespace, with a few exceptions:
//! - Section names (`B+`, `B-`, `E`) stand as words of their own.
//! - Each name in the symbol section runs to the end of its line.
//!
//! Line breaks are otherwise insignificant, though the current line is tracked to note the position of errors.

use std::io::BufRead;

use crate::types::err::{ErrorKind, FormatError, ParseError};

/// A reader of tokens from a buffered stream, one line at a time.
pub struct Lexer<R: BufRead> {
    /// The source of lines.
    reader: R,

    /// The bytes of the current line, before validation.
    bytes: Vec<u8>,

    /// The current line.
    buffer: String,

    /// The byte offset of the next unread character of the current line.
    position: usize,

    /// The count of lines read.
    line: usize,

    /// Whether the source has no further lines.
    exhausted: bool,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Lexer {
            reader,
            bytes: Vec::with_capacity(1024),
            buffer: String::with_capacity(1024),
            position: 0,
            line: 0,
            exhausted: false,
        }
    }

    /// The line of the most recently read character, counting from 1.
    pub fn line(&self) -> usize {
        self.line.max(1)
    }

    /// A parse error of the given kind at the current line.
    pub fn error(&self, kind: FormatError) -> ErrorKind {
        ErrorKind::Parse(ParseError::new(self.line(), kind))
    }

    /// The unread part of the current line.
    fn rest(&self) -> &str {
        &self.buffer[self.position..]
    }

    /// Reads the next line, if the current line has been read.
    ///
    /// Returns false if no further input exists.
    fn fill(&mut self) -> Result<bool, ErrorKind> {
        if self.position < self.buffer.len() {
            return Ok(true);
        }
        if self.exhausted {
            return Ok(false);
        }

        self.buffer.clear();
        self.bytes.clear();
        self.position = 0;
        if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
            self.exhausted = true;
            return Ok(false);
        }
        self.line += 1;

        match std::str::from_utf8(&self.bytes) {
            Ok(line) => {
                self.buffer.push_str(line);
                Ok(true)
            }
            Err(_) => Err(self.error(FormatError::InvalidEncoding)),
        }
    }

    /// Skips whitespace, including line breaks.
    ///
    /// Returns false if no further input exists.
    fn skip_whitespace(&mut self) -> Result<bool, ErrorKind> {
        loop {
            if !self.fill()? {
                return Ok(false);
            }
            let skipped = self.rest().len() - self.rest().trim_start().len();
            self.position += skipped;
            if self.position < self.buffer.len() {
                return Ok(true);
            }
        }
    }

    /// The next character which is not whitespace, without reading the character.
    pub fn peek(&mut self) -> Result<Option<char>, ErrorKind> {
        match self.skip_whitespace()? {
            true => Ok(self.rest().chars().next()),
            false => Ok(None),
        }
    }

    /// The next token, without reading the token.
    pub fn peek_token(&mut self) -> Result<Option<&str>, ErrorKind> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let length = self.token_length();
        Ok(Some(&self.rest()[..length]))
    }

    /// Whether the input has been read in full, ignoring trailing whitespace.
    pub fn at_end(&mut self) -> Result<bool, ErrorKind> {
        Ok(self.peek()?.is_none())
    }

    /// The length in bytes of the token at the start of the unread part of the current line.
    fn token_length(&self) -> usize {
        self.rest()
            .find(char::is_whitespace)
            .unwrap_or(self.rest().len())
    }

    /// Reads an unsigned number, where `what` describes the number for errors.
    pub fn match_uint(&mut self, what: &'static str) -> Result<u32, ErrorKind> {
        if !self.skip_whitespace()? {
            return Err(self.error(FormatError::MissingToken(what)));
        }

        let length = self.token_length();
        let token = &self.rest()[..length];
        if !token.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(self.error(FormatError::InvalidNumber(what)));
        }
        match token.parse::<u32>() {
            Ok(value) => {
                self.position += length;
                Ok(value)
            }
            Err(_) => Err(self.error(FormatError::InvalidNumber(what))),
        }
    }

    /// Reads the word `word`, if `word` is the next token.
    ///
    /// Returns whether the word was read.
    pub fn match_word(&mut self, word: &str) -> Result<bool, ErrorKind> {
        if !self.skip_whitespace()? {
            return Ok(false);
        }
        let length = self.token_length();
        if &self.rest()[..length] == word {
            self.position += length;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Reads the remainder of the current line, less surrounding whitespace.
    pub fn match_line(&mut self) -> String {
        let remainder = self.rest().trim().to_owned();
        self.position = self.buffer.len();
        remainder
    }
}

#[cfg(test)]
mod lexer_tests {
    use super::*;

    #[test]
    fn numbers_across_lines() {
        let mut lexer = Lexer::new("1 2\n\n  3\t4\n".as_bytes());
        for expected in 1..=4 {
            assert_eq!(lexer.match_uint("number").ok(), Some(expected));
        }
        assert_eq!(lexer.line(), 3);
        assert!(lexer.at_end().is_ok_and(|end| end));
    }

    #[test]
    fn invalid_numbers() {
        let mut lexer = Lexer::new("-3".as_bytes());
        assert!(matches!(
            lexer.match_uint("atom"),
            Err(ErrorKind::Parse(ParseError {
                line: 1,
                kind: FormatError::InvalidNumber("atom")
            }))
        ));

        let mut lexer = Lexer::new("12a".as_bytes());
        assert!(lexer.match_uint("atom").is_err());

        let mut lexer = Lexer::new("99999999999".as_bytes());
        assert!(lexer.match_uint("atom").is_err());
    }

    #[test]
    fn missing_number() {
        let mut lexer = Lexer::new("1\n".as_bytes());
        assert!(lexer.match_uint("head").is_ok());
        assert!(matches!(
            lexer.match_uint("body size"),
            Err(ErrorKind::Parse(ParseError {
                kind: FormatError::MissingToken("body size"),
                ..
            }))
        ));
    }

    #[test]
    fn invalid_encoding() {
        let mut lexer = Lexer::new(b"1\n2 a\xe9\n".as_slice());
        assert_eq!(lexer.match_uint("atom").ok(), Some(1));
        assert!(matches!(
            lexer.match_uint("atom"),
            Err(ErrorKind::Parse(ParseError {
                line: 2,
                kind: FormatError::InvalidEncoding
            }))
        ));
    }

    #[test]
    fn words_and_names() {
        let mut lexer = Lexer::new("B+\n3 p(a, b) \nB-x\n".as_bytes());
        assert!(lexer.match_word("B+").is_ok_and(|read| read));
        assert_eq!(lexer.match_uint("atom").ok(), Some(3));
        assert_eq!(lexer.match_line(), "p(a, b)");
        assert!(lexer.match_word("B-").is_ok_and(|read| !read));
        assert_eq!(lexer.peek().ok(), Some(Some('B')));
    }
}
