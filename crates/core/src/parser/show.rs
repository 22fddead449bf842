//! Show-operator text collection.
//!
//! Folds the token stream through a simplified operand stack: string
//! literals are pushed, a show-family operator pops the top string into the
//! output, numbers are left alone, and any other bare token clears the
//! stack. The full clear approximates operators consuming their operands.

use std::str::FromStr;

use super::lexer::{PsLexer, PsToken};
use super::number::is_numeric;

/// The text-painting operators whose string operand is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowOperator {
    Show,
    AShow,
    WidthShow,
    AWidthShow,
    XShow,
    YShow,
    XYShow,
    KShow,
}

impl ShowOperator {
    pub const ALL: [ShowOperator; 8] = [
        ShowOperator::Show,
        ShowOperator::AShow,
        ShowOperator::WidthShow,
        ShowOperator::AWidthShow,
        ShowOperator::XShow,
        ShowOperator::YShow,
        ShowOperator::XYShow,
        ShowOperator::KShow,
    ];

    /// Operator name as written in PostScript source.
    pub fn name(self) -> &'static str {
        match self {
            ShowOperator::Show => "show",
            ShowOperator::AShow => "ashow",
            ShowOperator::WidthShow => "widthshow",
            ShowOperator::AWidthShow => "awidthshow",
            ShowOperator::XShow => "xshow",
            ShowOperator::YShow => "yshow",
            ShowOperator::XYShow => "xyshow",
            ShowOperator::KShow => "kshow",
        }
    }

    /// Look up an operator by its exact source name.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "show" => ShowOperator::Show,
            "ashow" => ShowOperator::AShow,
            "widthshow" => ShowOperator::WidthShow,
            "awidthshow" => ShowOperator::AWidthShow,
            "xshow" => ShowOperator::XShow,
            "yshow" => ShowOperator::YShow,
            "xyshow" => ShowOperator::XYShow,
            "kshow" => ShowOperator::KShow,
            _ => return None,
        })
    }
}

impl FromStr for ShowOperator {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or(())
    }
}

impl std::fmt::Display for ShowOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Operand stack and output accumulator for one extraction.
#[derive(Debug, Default)]
pub struct ShowTextParser {
    /// Pending string operands (last = top).
    stack: Vec<String>,
    /// Strings consumed by show operators, in source order.
    shown: Vec<String>,
}

impl ShowTextParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one token.
    pub fn feed(&mut self, token: PsToken<'_>) {
        match token {
            PsToken::String(value) => self.stack.push(value),
            PsToken::Name(_) | PsToken::Delimiter(_) => {}
            PsToken::Bare(word) => self.apply(word),
        }
    }

    fn apply(&mut self, word: &str) {
        if ShowOperator::from_name(word).is_some() {
            if let Some(top) = self.stack.pop() {
                self.shown.push(top);
                return;
            }
        }
        if !is_numeric(word) {
            self.stack.clear();
        }
    }

    /// Number of string operands waiting on the stack.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Strings collected so far.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// Consume the parser and return the collected strings.
    pub fn into_shown(self) -> Vec<String> {
        self.shown
    }

    /// Consume the parser and join the collected strings with single spaces.
    pub fn finish(self) -> String {
        self.shown.join(" ")
    }
}

/// Collect every string painted by a show-family operator, in order.
pub fn collect_shown(text: &str) -> Vec<String> {
    let mut parser = ShowTextParser::new();
    for (_, token) in PsLexer::new(text) {
        parser.feed(token);
    }
    parser.into_shown()
}

/// Extract the text of a PostScript document.
///
/// Returns the show-operator operands joined with single spaces, or an empty
/// string when nothing is shown.
pub fn extract_text(text: &str) -> String {
    collect_shown(text).join(" ")
}
