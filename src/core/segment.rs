//! Comment segmentation.
//!
//! Splits a raw preference file into three streams: the text enclosed in
//! single-line comments, the text enclosed in multi-line comments, and the
//! active remainder. Each stream is fed to the declaration extractor
//! separately so commented-out declarations can be recorded as inactive.
//!
//! The segmenter is a character-level state machine rather than a set of
//! regex passes, so a `//` or `/*` inside a string literal never opens a
//! comment and an escaped quote never terminates one. Comment boundaries
//! follow JavaScript semantics:
//!
//! - a line comment runs to the end of the line;
//! - a block comment ends at the first `*/`, even when that `*/` appears
//!   inside what looks like a string literal;
//! - string literals do not span raw newlines.
//!
//! Inside comment text, a further `//` (or `/*`) marker is replaced with a
//! line break. That keeps a declaration following the marker on its own
//! line, where the extractor's anchored pattern can still see it.

/// The three extraction streams produced from one raw input.
#[derive(Debug, Default)]
pub struct Segments {
    /// Content of single-line (`//`) comments.
    pub line: String,
    /// Content of multi-line (`/* */`) comments, blocks separated by line
    /// breaks.
    pub block: String,
    /// Everything outside comment syntax.
    pub active: String,
}

#[derive(Clone, Copy)]
enum State {
    Code,
    CodeStr(char),
    Line,
    LineStr(char),
    Block,
    BlockStr(char),
}

pub fn segment(text: &str) -> Segments {
    let mut segments = Segments::default();
    let mut state = State::Code;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => {
                if c == '/' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Line;
                } else if c == '/' && chars.peek() == Some(&'*') {
                    chars.next();
                    state = State::Block;
                } else {
                    segments.active.push(c);
                    if c == '\'' || c == '"' {
                        state = State::CodeStr(c);
                    }
                }
            }
            State::CodeStr(quote) => {
                segments.active.push(c);
                if c == '\\' {
                    if let Some(&next) = chars.peek()
                        && next != '\n'
                    {
                        segments.active.push(next);
                        chars.next();
                    }
                } else if c == quote || c == '\n' {
                    state = State::Code;
                }
            }
            State::Line => {
                if c == '\n' {
                    // The newline terminates the comment but still separates
                    // statements in the surrounding code.
                    segments.line.push('\n');
                    segments.active.push('\n');
                    state = State::Code;
                } else if c == '/' && matches!(chars.peek(), Some(&'/') | Some(&'*')) {
                    chars.next();
                    segments.line.push('\n');
                } else {
                    segments.line.push(c);
                    if c == '\'' || c == '"' {
                        state = State::LineStr(c);
                    }
                }
            }
            State::LineStr(quote) => {
                if c == '\n' {
                    segments.line.push('\n');
                    segments.active.push('\n');
                    state = State::Code;
                } else {
                    segments.line.push(c);
                    if c == '\\' {
                        if let Some(&next) = chars.peek()
                            && next != '\n'
                        {
                            segments.line.push(next);
                            chars.next();
                        }
                    } else if c == quote {
                        state = State::Line;
                    }
                }
            }
            State::Block => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    segments.block.push('\n');
                    state = State::Code;
                } else if c == '/' && chars.peek() == Some(&'/') {
                    chars.next();
                    segments.block.push('\n');
                } else {
                    segments.block.push(c);
                    if c == '\'' || c == '"' {
                        state = State::BlockStr(c);
                    }
                }
            }
            State::BlockStr(quote) => {
                if c == '*' && chars.peek() == Some(&'/') {
                    // Block comments end unconditionally, string or not.
                    chars.next();
                    segments.block.push('\n');
                    state = State::Code;
                } else {
                    segments.block.push(c);
                    if c == '\\' {
                        if let Some(&next) = chars.peek()
                            && next != '\n'
                        {
                            segments.block.push(next);
                            chars.next();
                        }
                    } else if c == quote || c == '\n' {
                        state = State::Block;
                    }
                }
            }
        }
    }

    segments
}
