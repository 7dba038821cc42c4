use std::iter::Peekable;
use std::str::Chars;

/// One whitespace-separated item of a master file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Word {
    pub text: String,
    /// Came from a `"..."` string; never a directive, `@` or a TTL.
    pub quoted: bool,
}

/// A logical line: parentheses may spread it over several physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Entry {
    /// Physical line the entry starts on, 1-based.
    pub line: usize,
    /// The line started with blank space, so the owner is the previous one.
    pub continues_owner: bool,
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LexError {
    pub line: usize,
    pub reason: &'static str,
}

/// Splits zone text into entries, dropping comments and empty lines.
pub(super) fn entries(text: &str) -> Result<Vec<Entry>, LexError> {
    Lexer::new(text).run()
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    depth: usize,
    blank_start: bool,
    pending: Option<Entry>,
    entries: Vec<Entry>,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            line: 1,
            depth: 0,
            blank_start: false,
            pending: None,
            entries: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Entry>, LexError> {
        let mut line_start = true;

        while let Some(ch) = self.chars.next() {
            if std::mem::replace(&mut line_start, false) {
                self.blank_start = ch == ' ' || ch == '\t';
            }

            match ch {
                '\n' => {
                    self.line += 1;
                    if self.depth == 0 {
                        self.finish_entry();
                        line_start = true;
                    }
                }
                ';' => self.skip_comment(),
                '(' => self.depth += 1,
                ')' => {
                    if self.depth == 0 {
                        return Err(self.error("unbalanced ')'"));
                    }
                    self.depth -= 1;
                }
                '"' => {
                    let text = self.quoted()?;
                    self.push(Word { text, quoted: true });
                }
                c if c.is_whitespace() => {}
                c => {
                    let text = self.plain(c);
                    self.push(Word {
                        text,
                        quoted: false,
                    });
                }
            }
        }

        if self.depth > 0 {
            return Err(self.error("unclosed '('"));
        }
        self.finish_entry();
        Ok(self.entries)
    }

    fn error(&self, reason: &'static str) -> LexError {
        LexError {
            line: self.line,
            reason,
        }
    }

    fn push(&mut self, word: Word) {
        let line = self.line;
        let continues_owner = self.blank_start;
        self.pending
            .get_or_insert_with(|| Entry {
                line,
                continues_owner,
                words: Vec::new(),
            })
            .words
            .push(word);
    }

    fn finish_entry(&mut self) {
        if let Some(entry) = self.pending.take() {
            self.entries.push(entry);
        }
    }

    fn skip_comment(&mut self) {
        while self.chars.next_if(|&c| c != '\n').is_some() {}
    }

    /// Escapes are kept as written; the name and rdata parsers decode them.
    fn plain(&mut self, first: char) -> String {
        let mut text = String::from(first);
        let mut escaped = first == '\\';
        while let Some(&c) = self.chars.peek() {
            if !escaped && (c.is_whitespace() || matches!(c, ';' | '(' | ')' | '"')) {
                break;
            }
            escaped = !escaped && c == '\\';
            text.push(c);
            self.chars.next();
        }
        text
    }

    fn quoted(&mut self) -> Result<String, LexError> {
        let mut text = String::new();
        loop {
            match self.chars.next() {
                Some('"') => return Ok(text),
                Some('\\') => text.push(self.escape()?),
                Some('\n') | None => return Err(self.error("unterminated quoted string")),
                Some(c) => text.push(c),
            }
        }
    }

    /// `\X` yields X, `\DDD` yields the octet with that decimal value.
    fn escape(&mut self) -> Result<char, LexError> {
        match self.chars.next() {
            Some(d) if d.is_ascii_digit() => {
                let mut value = d.to_digit(10).unwrap_or_default();
                for _ in 0..2 {
                    let digit = self
                        .chars
                        .next()
                        .and_then(|c| c.to_digit(10))
                        .ok_or_else(|| self.error("bad \\DDD escape"))?;
                    value = value * 10 + digit;
                }
                u8::try_from(value)
                    .map(char::from)
                    .map_err(|_| self.error("bad \\DDD escape"))
            }
            Some('\n') | None => Err(self.error("unterminated quoted string")),
            Some(c) => Ok(c),
        }
    }
}
