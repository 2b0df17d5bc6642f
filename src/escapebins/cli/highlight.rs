//! Shell syntax highlighting for technique code.
//!
//! A small single-pass tokenizer, not a shell parser: it only needs to be good enough to make
//! one-liners and short scripts readable. Each token maps to a `sh-*` style name, and the
//! concatenated token texts always reproduce the input exactly, so with color disabled the
//! highlighted output is the code itself.

use super::styles::{names, StyleConfig};

const KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case", "esac",
    "in", "function", "select", "time", "!",
];

/// Characters that end a word.
const BREAKS: &[char] = &['\'', '"', '$', '|', '&', ';', '<', '>', '(', ')', '`', '\\'];

const OPERATORS: &[char] = &['|', '&', ';', '<', '>', '(', ')', '`'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    Command,
    Keyword,
    Option,
    Path,
    Word,
    String,
    Variable,
    Operator,
    Comment,
    Escape,
}

impl TokenKind {
    pub fn style_name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace | TokenKind::Word => names::SH_TEXT,
            TokenKind::Command => names::SH_COMMAND,
            TokenKind::Keyword => names::SH_KEYWORD,
            TokenKind::Option => names::SH_OPTION,
            TokenKind::Path => names::SH_PATH,
            TokenKind::String => names::SH_STRING,
            TokenKind::Variable => names::SH_VARIABLE,
            TokenKind::Operator => names::SH_OPERATOR,
            TokenKind::Comment => names::SH_COMMENT,
            TokenKind::Escape => names::SH_ESCAPE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    /// The next word starts a command (start of input, after `|`, `;`, `&&`, keywords...).
    command_position: bool,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            command_position: true,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn at_word_start(&self) -> bool {
        self.src[..self.pos]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace() || OPERATORS.contains(&c))
    }

    fn next_token(&mut self) -> Option<Token<'a>> {
        let start = self.pos;
        let c = self.peek()?;

        let kind = match c {
            c if c.is_whitespace() => {
                self.eat_while(char::is_whitespace);
                if self.src[start..self.pos].contains('\n') {
                    self.command_position = true;
                }
                TokenKind::Whitespace
            }
            '#' if self.at_word_start() => {
                self.eat_while(|c| c != '\n');
                TokenKind::Comment
            }
            '\'' => {
                self.bump();
                self.eat_while(|c| c != '\'');
                self.bump();
                self.command_position = false;
                TokenKind::String
            }
            '"' => {
                self.bump();
                while let Some(c) = self.bump() {
                    match c {
                        '\\' => {
                            self.bump();
                        }
                        '"' => break,
                        _ => {}
                    }
                }
                self.command_position = false;
                TokenKind::String
            }
            '\\' => {
                self.bump();
                self.bump();
                TokenKind::Escape
            }
            '$' => self.variable(),
            c if OPERATORS.contains(&c) => {
                self.eat_while(|c| OPERATORS.contains(&c));
                let op = &self.src[start..self.pos];
                self.command_position = op.contains(|c| matches!(c, '|' | '&' | ';' | '(' | '`'));
                TokenKind::Operator
            }
            _ => self.word(start),
        };

        Some(Token {
            kind,
            text: &self.src[start..self.pos],
        })
    }

    fn variable(&mut self) -> TokenKind {
        self.bump();
        match self.peek() {
            Some('{') => {
                self.eat_while(|c| c != '}');
                self.bump();
            }
            Some('(') => {
                self.bump();
                self.command_position = true;
                return TokenKind::Variable;
            }
            Some(c) if c.is_alphabetic() || c == '_' => {
                self.eat_while(|c| c.is_alphanumeric() || c == '_');
            }
            Some(c) if c.is_ascii_digit() || "?#@*$!-".contains(c) => {
                self.bump();
            }
            _ => return TokenKind::Word,
        }
        self.command_position = false;
        TokenKind::Variable
    }

    fn word(&mut self, start: usize) -> TokenKind {
        self.eat_while(|c| !c.is_whitespace() && !BREAKS.contains(&c));
        let text = &self.src[start..self.pos];

        if self.command_position {
            if KEYWORDS.contains(&text) {
                return TokenKind::Keyword;
            }
            if is_assignment(text) {
                return TokenKind::Variable;
            }
            self.command_position = false;
            return TokenKind::Command;
        }

        if text.starts_with('-') && text.len() > 1 {
            TokenKind::Option
        } else if text.contains('/') {
            TokenKind::Path
        } else {
            TokenKind::Word
        }
    }
}

/// `NAME=` prefix of an environment assignment such as `TF=$(mktemp)` or `LFILE=/etc/shadow`.
fn is_assignment(word: &str) -> bool {
    match word.split_once('=') {
        Some((name, _)) => {
            !name.is_empty()
                && !name.starts_with(|c: char| c.is_ascii_digit())
                && name.chars().all(|c| c.is_alphanumeric() || c == '_')
        }
        None => false,
    }
}

/// Splits shell code into classified tokens.
pub fn tokenize(code: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(code);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }
    tokens
}

/// Styles shell code for the terminal. Plain text when color is off.
pub fn highlight(code: &str, style: &StyleConfig) -> String {
    if !style.use_color() {
        return code.to_string();
    }
    tokenize(code)
        .into_iter()
        .map(|token| match token.kind {
            TokenKind::Whitespace => token.text.to_string(),
            kind => style.paint(kind.style_name(), token.text),
        })
        .collect()
}
