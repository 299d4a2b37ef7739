//! Lexer (tokenizer) for offside source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Source is processed one line at a time: leading whitespace is measured
//! against a stack of open indentation widths, and changes in width are turned
//! into synthetic [`TokenKind::Indent`] / [`TokenKind::Dedent`] tokens before
//! the rest of the line is scanned.
//!
//! The lexer never fails. A character no rule recognizes becomes a single
//! [`TokenKind::Illegal`] token and scanning resumes after it, so callers
//! always get a complete stream to report diagnostics from.

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structure
    Eof,
    Indent,
    Dedent,

    // Literals
    Ident,
    Int,
    Float,
    String,
    True,
    False,
    Nil,

    // Keywords
    Function,
    Module,
    Import,
    Let,
    If,
    Then,
    Else,
    Return,
    And, // and, &&
    Or,  // or, ||
    Is,
    Not,

    // Assignment
    Assign,      // =
    PlusAssign,  // +=
    MinusAssign, // -=
    StarAssign,  // *=
    SlashAssign, // /=

    // Arithmetic
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Bang,    // !

    // Comparison
    EqEq,  // ==
    NotEq, // !=
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Punctuation
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]

    Illegal,
}

impl TokenKind {
    /// Display name of the kind, as used in diagnostics and token dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Nil => "NIL",
            TokenKind::Function => "FUNCTION",
            TokenKind::Module => "MODULE",
            TokenKind::Import => "IMPORT",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Is => "IS",
            TokenKind::Not => "NOT",
            TokenKind::Assign => "=",
            TokenKind::PlusAssign => "+=",
            TokenKind::MinusAssign => "-=",
            TokenKind::StarAssign => "*=",
            TokenKind::SlashAssign => "/=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Bang => "!",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single lexeme with its kind and the position of its first character.
///
/// `text` is the exact matched source text (string literals keep their
/// quotes); it is empty for synthesized INDENT, DEDENT and EOF tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    #[serde(flatten)]
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "[{}] {}", self.location, self.kind)
        } else {
            write!(f, "[{}] {} {:?}", self.location, self.kind, self.text)
        }
    }
}

fn keyword_table() -> FxHashMap<&'static str, TokenKind> {
    let mut keywords = FxHashMap::default();
    keywords.insert("and", TokenKind::And);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("false", TokenKind::False);
    keywords.insert("fn", TokenKind::Function);
    keywords.insert("if", TokenKind::If);
    keywords.insert("is", TokenKind::Is);
    keywords.insert("import", TokenKind::Import);
    keywords.insert("let", TokenKind::Let);
    keywords.insert("module", TokenKind::Module);
    keywords.insert("nil", TokenKind::Nil);
    keywords.insert("not", TokenKind::Not);
    keywords.insert("or", TokenKind::Or);
    keywords.insert("return", TokenKind::Return);
    keywords.insert("true", TokenKind::True);
    keywords.insert("then", TokenKind::Then);
    keywords
}

/// Tokenize `source` in one call.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Line-oriented lexer with an indentation stack
pub struct Lexer {
    lines: Vec<String>,
    keywords: FxHashMap<&'static str, TokenKind>,
    indent_stack: Vec<usize>,
    tokens: Vec<Token>,
    // Per-line scanning state
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(source: &str) -> Self {
        let lines = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();

        Self {
            lines,
            keywords: keyword_table(),
            indent_stack: vec![0],
            tokens: Vec::new(),
            input: Vec::new(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> Vec<Token> {
        let lines = std::mem::take(&mut self.lines);
        let line_count = lines.len();

        for (index, line) in lines.into_iter().enumerate() {
            self.start_line(index + 1, &line);
            self.scan_line();
        }

        // Close every block still open at end of input
        let end = SourceLocation::new(line_count + 1, 1);
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.tokens.push(Token::new(TokenKind::Dedent, "", end));
        }
        self.tokens.push(Token::new(TokenKind::Eof, "", end));

        self.tokens
    }

    /// Load a line, measure its indentation and emit structural tokens.
    fn start_line(&mut self, line: usize, text: &str) {
        self.input = text.chars().collect();
        self.line = line;
        self.column = 1;
        self.position = 0;

        let width = self
            .input
            .iter()
            .take_while(|&&ch| ch == ' ' || ch == '\t')
            .count();

        // Every line is measured, blank and comment-only ones included
        self.track_indentation(width);

        self.position = width;
        self.column += width;
    }

    fn track_indentation(&mut self, width: usize) {
        let loc = SourceLocation::new(self.line, 1);
        let top = self.indent_stack.last().copied().unwrap_or(0);

        if width > top {
            self.indent_stack.push(width);
            self.tokens.push(Token::new(TokenKind::Indent, "", loc));
            return;
        }

        while self.indent_stack.last().is_some_and(|&open| open > width) {
            self.indent_stack.pop();
            self.tokens.push(Token::new(TokenKind::Dedent, "", loc));
        }
    }

    fn scan_line(&mut self) {
        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                break;
            }

            let token = self.next_token();
            self.tokens.push(token);
        }
    }

    /// Get next token
    fn next_token(&mut self) -> Token {
        let loc = self.current_location();
        let start = self.position;

        let Some(ch) = self.advance() else {
            return Token::new(TokenKind::Eof, "", loc);
        };

        let kind = match ch {
            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => {
                self.identifier();
                let text = self.lexeme(start);
                let kind = self.keywords.get(text.as_str()).copied();
                return Token::new(kind.unwrap_or(TokenKind::Ident), text, loc);
            }

            // Numeric literals
            '0'..='9' => self.number_literal(),

            // String literals
            '"' => self.string_literal(),

            // Operators: two-character forms first
            '=' => self.either('=', TokenKind::EqEq, TokenKind::Assign),
            '!' => self.either('=', TokenKind::NotEq, TokenKind::Bang),
            '<' => self.either('=', TokenKind::LtEq, TokenKind::Lt),
            '>' => self.either('=', TokenKind::GtEq, TokenKind::Gt),
            '+' => self.either('=', TokenKind::PlusAssign, TokenKind::Plus),
            '-' => self.either('=', TokenKind::MinusAssign, TokenKind::Minus),
            '*' => self.either('=', TokenKind::StarAssign, TokenKind::Star),
            '/' => self.either('=', TokenKind::SlashAssign, TokenKind::Slash),
            '&' => self.either('&', TokenKind::And, TokenKind::Illegal),
            '|' => self.either('|', TokenKind::Or, TokenKind::Illegal),

            '%' => TokenKind::Percent,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,

            _ => TokenKind::Illegal,
        };

        Token::new(kind, self.lexeme(start), loc)
    }

    /// Consume `second` if it follows, choosing between the two-character
    /// and one-character kinds.
    fn either(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    fn identifier(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Digits, optionally followed by `.` and at least one more digit.
    fn number_literal(&mut self) -> TokenKind {
        self.skip_digits();

        let has_fraction = self.peek() == Some('.')
            && self.peek_ahead(1).is_some_and(|ch| ch.is_ascii_digit());
        if !has_fraction {
            return TokenKind::Int;
        }

        self.advance(); // consume '.'
        self.skip_digits();
        TokenKind::Float
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Double-quoted string up to the next `"` on the same line. Without a
    /// closing quote only the opening `"` is consumed, as an illegal token.
    fn string_literal(&mut self) -> TokenKind {
        let closing = self.input[self.position..]
            .iter()
            .position(|&ch| ch == '"');

        match closing {
            Some(offset) => {
                for _ in 0..=offset {
                    self.advance();
                }
                TokenKind::String
            }
            None => TokenKind::Illegal,
        }
    }

    /// Skip intra-line whitespace and `#` comments
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' => {
                    self.advance();
                }
                '#' => {
                    while self.advance().is_some() {}
                }
                _ => break,
            }
        }
    }

    fn lexeme(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character on the current line
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        self.column += 1;
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("let x = 42");

        assert_eq!(tokens[0].kind, TokenKind::Let);
        assert!(matches!(&tokens[1], Token { kind: TokenKind::Ident, text, .. } if text == "x"));
        assert_eq!(tokens[2].kind, TokenKind::Assign);
        assert!(matches!(&tokens[3], Token { kind: TokenKind::Int, text, .. } if text == "42"));
        assert_eq!(tokens[4].kind, TokenKind::Eof);
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("== != <= >= && || += -= *= /= = < > + - * / % !"),
            vec![
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::PlusAssign,
                TokenKind::MinusAssign,
                TokenKind::StarAssign,
                TokenKind::SlashAssign,
                TokenKind::Assign,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Bang,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("fn module import let if then else return and or is not true false nil"),
            vec![
                TokenKind::Function,
                TokenKind::Module,
                TokenKind::Import,
                TokenKind::Let,
                TokenKind::If,
                TokenKind::Then,
                TokenKind::Else,
                TokenKind::Return,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Is,
                TokenKind::Not,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Nil,
                TokenKind::Eof,
            ]
        );
        // Keyword prefixes stay identifiers
        assert_eq!(kinds("iffy lettuce"), vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("3.14 42 7.");

        assert!(matches!(&tokens[0], Token { kind: TokenKind::Float, text, .. } if text == "3.14"));
        assert!(matches!(&tokens[1], Token { kind: TokenKind::Int, text, .. } if text == "42"));
        assert!(matches!(&tokens[2], Token { kind: TokenKind::Int, text, .. } if text == "7"));
        assert!(matches!(&tokens[3], Token { kind: TokenKind::Illegal, text, .. } if text == "."));
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("42 # the answer\n# whole line\n7");

        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Int, TokenKind::Int, TokenKind::Eof]
        );
        assert_eq!(tokens[1].location, SourceLocation::new(3, 1));
    }

    #[test]
    fn test_string_literal() {
        let tokens = tokenize(r#"x = "hello world""#);

        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, "\"hello world\"");
        assert_eq!(tokens[2].column(), 5);
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = tokenize("\"abc");

        assert!(matches!(&tokens[0], Token { kind: TokenKind::Illegal, text, .. } if text == "\""));
        assert!(matches!(&tokens[1], Token { kind: TokenKind::Ident, text, .. } if text == "abc"));
    }

    #[test]
    fn test_illegal_character_recovery() {
        let tokens = tokenize("42 @ 10");

        assert_eq!(
            tokens.iter().map(|t| (t.kind, t.text.as_str())).collect::<Vec<_>>(),
            vec![
                (TokenKind::Int, "42"),
                (TokenKind::Illegal, "@"),
                (TokenKind::Int, "10"),
                (TokenKind::Eof, ""),
            ]
        );
        assert_eq!(tokens[1].location, SourceLocation::new(1, 4));
    }

    #[test]
    fn test_single_ampersand_is_illegal() {
        assert_eq!(
            kinds("a & b"),
            vec![TokenKind::Ident, TokenKind::Illegal, TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn test_indent_and_dedent() {
        let tokens = tokenize("a\n    b\n        c\nd");

        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Ident,
                TokenKind::Indent,
                TokenKind::Ident,
                TokenKind::Indent,
                TokenKind::Ident,
                TokenKind::Dedent,
                TokenKind::Dedent,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[1].location, SourceLocation::new(2, 1));
        assert_eq!(tokens[2].location, SourceLocation::new(2, 5));
        assert_eq!(tokens[5].location, SourceLocation::new(4, 1));
    }

    #[test]
    fn test_trailing_dedents_after_last_line() {
        let tokens = tokenize("a\n  b\n    c");
        let n = tokens.len();

        assert_eq!(tokens[n - 3].kind, TokenKind::Dedent);
        assert_eq!(tokens[n - 2].kind, TokenKind::Dedent);
        assert_eq!(tokens[n - 1].kind, TokenKind::Eof);
        for token in &tokens[n - 3..] {
            assert_eq!(token.location, SourceLocation::new(4, 1));
        }
    }

    #[test]
    fn test_blank_line_closes_block() {
        let tokens = tokenize("a\n    b\n\n    c");

        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Ident,
                TokenKind::Indent,
                TokenKind::Ident,
                TokenKind::Dedent,
                TokenKind::Indent,
                TokenKind::Ident,
                TokenKind::Dedent,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[3].location, SourceLocation::new(3, 1));
        assert_eq!(tokens[4].location, SourceLocation::new(4, 1));
    }

    #[test]
    fn test_comment_only_line_is_measured() {
        assert_eq!(kinds("a\n    b\n# note\n    c"), kinds("a\n    b\n\n    c"));
        assert_eq!(
            kinds("a\n    b\n    # note\n    c"),
            vec![
                TokenKind::Ident,
                TokenKind::Indent,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Dedent,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_whitespace_only_line_opens_empty_block() {
        assert_eq!(
            kinds("a\n  \nb"),
            vec![
                TokenKind::Ident,
                TokenKind::Indent,
                TokenKind::Dedent,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tabs_count_as_single_characters() {
        let tokens = tokenize("a\n\tb\n    c");

        // A tab is width 1, so four spaces open a second, deeper block
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Ident,
                TokenKind::Indent,
                TokenKind::Ident,
                TokenKind::Indent,
                TokenKind::Ident,
                TokenKind::Dedent,
                TokenKind::Dedent,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[2].column(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(kinds("a\r\n  b\r\n"), kinds("a\n  b\n"));
    }

    #[test]
    fn test_empty_source() {
        let tokens = tokenize("");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_token_display() {
        let tokens = tokenize("x @");

        assert_eq!(tokens[0].to_string(), "[1:1] IDENT \"x\"");
        assert_eq!(tokens[1].to_string(), "[1:3] ILLEGAL \"@\"");
        assert_eq!(tokens[2].to_string(), "[2:1] EOF");
    }
}
