//! Compilation of constraint patterns.
//!
//! Perl classes (`\d`, `\w`, `\s` and their negations) and word boundaries are ASCII-only.
//! Everything else keeps Unicode semantics, so `.` still matches one whole character and
//! `\pL` still means any letter. Syntax errors are reported on a single line as
//! `error parsing regexp: <reason>: `<fragment>``.

use regex::Regex;
use regex_syntax::ast::{
    self, AssertionKind, Ast, ClassPerl, ClassPerlKind, ClassSetItem, Visitor,
};
use regex_syntax::hir;

/// A constraint pattern that does not compile.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("error parsing regexp: {reason}: `{fragment}`")]
pub struct PatternError {
    reason: String,
    fragment: String,
}

impl PatternError {
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The part of the pattern the error points at.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

/// Compile a constraint pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
    let tree = ast::parse::Parser::new()
        .parse(pattern)
        .map_err(|err| syntax_error(pattern, &err))?;
    hir::translate::Translator::new()
        .translate(pattern, &tree)
        .map_err(|err| translate_error(pattern, &err))?;

    let rewritten = ascii_classes(pattern, &tree);
    Regex::new(&rewritten).map_err(|err| build_error(pattern, &err))
}

/// A replacement of `pattern[start..end]`.
struct Edit {
    start: usize,
    end: usize,
    text: String,
}

struct AsciiRewrite<'p> {
    pattern: &'p str,
    edits: Vec<Edit>,
}

impl AsciiRewrite<'_> {
    fn push(&mut self, span: &ast::Span, text: String) {
        self.edits.push(Edit {
            start: span.start.offset,
            end: span.end.offset,
            text,
        });
    }

    fn perl_class(&mut self, class: &ClassPerl) {
        // Nested brackets are accepted both on their own and inside another class.
        let members = match class.kind {
            ClassPerlKind::Digit => "0-9",
            ClassPerlKind::Space => r"\t\n\f\r\x20",
            ClassPerlKind::Word => "0-9A-Za-z_",
        };
        let negation = if class.negated { "^" } else { "" };
        self.push(&class.span, format!("[{negation}{members}]"));
    }
}

impl Visitor for AsciiRewrite<'_> {
    type Output = Vec<Edit>;
    type Err = std::convert::Infallible;

    fn finish(self) -> Result<Self::Output, Self::Err> {
        Ok(self.edits)
    }

    fn visit_pre(&mut self, node: &Ast) -> Result<(), Self::Err> {
        match node {
            Ast::ClassPerl(class) => self.perl_class(class),
            Ast::Assertion(assertion) if is_word_boundary(&assertion.kind) => {
                let text = span_text(self.pattern, &assertion.span).to_string();
                self.push(&assertion.span, format!("(?-u:{text})"));
            }
            _ => {}
        }
        Ok(())
    }

    fn visit_class_set_item_pre(&mut self, item: &ClassSetItem) -> Result<(), Self::Err> {
        if let ClassSetItem::Perl(class) = item {
            self.perl_class(class);
        }
        Ok(())
    }
}

fn is_word_boundary(kind: &AssertionKind) -> bool {
    !matches!(
        kind,
        AssertionKind::StartLine
            | AssertionKind::EndLine
            | AssertionKind::StartText
            | AssertionKind::EndText
    )
}

fn ascii_classes(pattern: &str, tree: &Ast) -> String {
    let mut edits = match ast::visit(
        tree,
        AsciiRewrite {
            pattern,
            edits: Vec::new(),
        },
    ) {
        Ok(edits) => edits,
        Err(never) => match never {},
    };
    if edits.is_empty() {
        return pattern.to_string();
    }
    edits.sort_by_key(|edit| edit.start);

    let mut out = String::with_capacity(pattern.len() + edits.len() * 8);
    let mut cursor = 0;
    for edit in edits {
        out.push_str(&pattern[cursor..edit.start]);
        out.push_str(&edit.text);
        cursor = edit.end;
    }
    out.push_str(&pattern[cursor..]);
    out
}

fn span_text<'p>(pattern: &'p str, span: &ast::Span) -> &'p str {
    pattern
        .get(span.start.offset..span.end.offset)
        .unwrap_or(pattern)
}

fn tail_text<'p>(pattern: &'p str, span: &ast::Span) -> &'p str {
    pattern.get(span.start.offset..).unwrap_or(pattern)
}

/// The single character at the start of `span`. Repetition errors carry an empty span.
fn operator_text<'p>(pattern: &'p str, span: &ast::Span) -> &'p str {
    let tail = tail_text(pattern, span);
    let end = tail.chars().next().map_or(0, char::len_utf8);
    &tail[..end]
}

fn syntax_error(pattern: &str, err: &ast::Error) -> PatternError {
    use ast::ErrorKind as K;

    let span = err.span();
    let (reason, fragment) = match err.kind() {
        K::ClassUnclosed => ("missing closing ]".to_string(), tail_text(pattern, span)),
        K::GroupUnclosed => ("missing closing )".to_string(), pattern),
        K::GroupUnopened => ("unexpected )".to_string(), pattern),
        K::RepetitionMissing => (
            "missing argument to repetition operator".to_string(),
            operator_text(pattern, span),
        ),
        K::RepetitionCountInvalid
        | K::RepetitionCountUnclosed
        | K::RepetitionCountDecimalEmpty
        | K::DecimalEmpty
        | K::DecimalInvalid => ("invalid repeat count".to_string(), span_text(pattern, span)),
        K::EscapeUnexpectedEof => ("trailing backslash at end of expression".to_string(), ""),
        K::EscapeUnrecognized
        | K::EscapeHexEmpty
        | K::EscapeHexInvalid
        | K::EscapeHexInvalidDigit
        | K::ClassEscapeInvalid => (
            "invalid escape sequence".to_string(),
            span_text(pattern, span),
        ),
        K::ClassRangeInvalid | K::ClassRangeLiteral | K::UnicodeClassInvalid => (
            "invalid character class range".to_string(),
            span_text(pattern, span),
        ),
        K::GroupNameEmpty
        | K::GroupNameInvalid
        | K::GroupNameUnexpectedEof
        | K::GroupNameDuplicate { .. } => (
            "invalid named capture".to_string(),
            span_text(pattern, span),
        ),
        K::FlagUnrecognized
        | K::FlagDanglingNegation
        | K::FlagDuplicate { .. }
        | K::FlagRepeatedNegation { .. }
        | K::FlagUnexpectedEof
        | K::UnsupportedLookAround
        | K::UnsupportedBackreference => (
            "invalid or unsupported Perl syntax".to_string(),
            span_text(pattern, span),
        ),
        K::NestLimitExceeded(_) => ("expression nests too deeply".to_string(), pattern),
        other => (other.to_string(), span_text(pattern, span)),
    };
    PatternError {
        reason,
        fragment: fragment.to_string(),
    }
}

fn translate_error(pattern: &str, err: &hir::Error) -> PatternError {
    let reason = match err.kind() {
        hir::ErrorKind::UnicodePropertyNotFound | hir::ErrorKind::UnicodePropertyValueNotFound => {
            "invalid character class range".to_string()
        }
        other => other.to_string(),
    };
    PatternError {
        reason,
        fragment: span_text(pattern, err.span()).to_string(),
    }
}

fn build_error(pattern: &str, err: &regex::Error) -> PatternError {
    let reason = match err {
        regex::Error::CompiledTooBig(_) => "expression too large".to_string(),
        other => other
            .to_string()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    };
    PatternError {
        reason,
        fragment: pattern.to_string(),
    }
}
