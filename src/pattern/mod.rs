//! Pattern compiler shared by the entry, time and host grammars.
//!
//! A template is scanned once into a [`Chain`] of steps: literal runs, grammar
//! instructions, and ordered choices. The chain is immutable and is executed
//! against a fresh [`Cursor`] for every line.
//!
//! Syntax common to every grammar:
//! - `%%` is a literal percent sign
//! - `%X` or `%X(arg)` is a specifier, dispatched to the grammar
//! - `@(a|b|...)` tries each alternative in order, rewinding on mismatch
//! - `\X` escapes one of `\ @ * ( ) |`

pub mod class;
pub mod cursor;
mod entry;
mod host;
pub mod scan;
mod time;

pub use cursor::Cursor;
pub use entry::Pattern;
pub use host::{Host, HostPattern};
pub use time::{TimePattern, When};

use crate::error::{Error, Result};

/// Specifier arguments longer than this are rejected at compile time.
pub const MAX_ARGUMENT: usize = 64;

/// Deepest `@(...)` nesting accepted in one template.
pub const MAX_NESTING: usize = 16;

const ESCAPABLE: &[char] = &['\\', '@', '*', '(', ')', '|'];

/// One executable operation of a grammar, applied to that grammar's accumulator.
pub(crate) trait Instruction {
    type Target: Clone;

    fn exec(&self, cur: &mut Cursor, target: &mut Self::Target) -> Result<()>;
}

/// Maps specifier letters to instructions.
pub(crate) trait Grammar {
    type Insn: Instruction;

    /// Used in syntax error messages.
    const NAME: &'static str;

    /// Compiles specifier `spec`. Implementations read their argument from `tpl`
    /// and may expand a shorthand into several steps.
    fn specifier(spec: char, tpl: &mut Template) -> Result<Vec<Step<Self::Insn>>>;
}

#[derive(Debug, Clone)]
pub(crate) enum Step<I> {
    Literal(Vec<char>),
    Exec(I),
    Choice(Vec<Chain<I>>),
}

impl<I: Instruction> Step<I> {
    fn run(&self, cur: &mut Cursor, target: &mut I::Target) -> Result<()> {
        match self {
            Self::Literal(lit) => scan::literal(cur, lit),
            Self::Exec(insn) => insn.exec(cur, target),
            Self::Choice(branches) => choose(branches, cur, target),
        }
    }
}

/// Ordered choice: every branch starts from the same cursor position and the same
/// accumulator state. Only a mismatch moves on to the next branch.
fn choose<I: Instruction>(
    branches: &[Chain<I>],
    cur: &mut Cursor,
    target: &mut I::Target,
) -> Result<()> {
    let start = cur.position();
    let saved = target.clone();
    for branch in branches {
        match branch.run(cur, target) {
            Ok(()) => return Ok(()),
            Err(e) if e.is_mismatch() => {
                cur.seek(start);
                target.clone_from(&saved);
            }
            Err(e) => return Err(e),
        }
    }
    Err(Error::Mismatch)
}

/// Compiled, immutable sequence of steps.
#[derive(Debug, Clone)]
pub(crate) struct Chain<I> {
    steps: Vec<Step<I>>,
}

impl<I: Instruction> Chain<I> {
    pub(crate) fn run(&self, cur: &mut Cursor, target: &mut I::Target) -> Result<()> {
        for step in &self.steps {
            step.run(cur, target)?;
        }
        Ok(())
    }
}

impl<I> Chain<I> {
    pub(crate) fn into_steps(self) -> Vec<Step<I>> {
        self.steps
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Template being compiled; a cursor over the pattern text itself.
pub(crate) struct Template {
    cur: Cursor,
    depth: usize,
}

impl Template {
    fn new(pattern: &str) -> Self {
        Self {
            cur: Cursor::new(pattern),
            depth: 0,
        }
    }

    /// Reads the optional `(...)` argument following a specifier.
    ///
    /// Parentheses nest, so a host argument may itself hold an alternation;
    /// escaped parentheses are kept verbatim and do not count.
    pub(crate) fn argument(&mut self, what: &str) -> Result<Option<String>> {
        if !self.cur.eat('(') {
            return Ok(None);
        }
        let mut buf = String::new();
        let mut len = 0;
        let mut depth = 0usize;
        loop {
            let Some(c) = self.cur.read() else {
                return Err(Error::syntax(format!("{what}: missing )")));
            };
            match c {
                ')' if depth == 0 => return Ok(Some(buf)),
                ')' => depth -= 1,
                '(' => depth += 1,
                '\\' => {
                    buf.push(c);
                    len += 1;
                    let Some(next) = self.cur.read() else {
                        return Err(Error::syntax(format!("{what}: missing )")));
                    };
                    buf.push(next);
                    len += 1;
                    if len > MAX_ARGUMENT {
                        return Err(Error::syntax(format!("{what}: argument too long ({buf})")));
                    }
                    continue;
                }
                _ => {}
            }
            buf.push(c);
            len += 1;
            if len > MAX_ARGUMENT {
                return Err(Error::syntax(format!("{what}: argument too long ({buf})")));
            }
        }
    }

    /// The literal rune that follows in the template, without consuming it.
    /// An escape yields the escaped rune.
    pub(crate) fn following(&self) -> Option<char> {
        match self.cur.peek() {
            Some('\\') => self.cur.peek_at(1),
            other => other,
        }
    }
}

/// Compiles a whole template with grammar `G`.
///
/// # Errors
/// `Syntax` for an empty template or any malformed construct.
pub(crate) fn compile<G: Grammar>(pattern: &str) -> Result<Chain<G::Insn>> {
    if pattern.is_empty() {
        return Err(Error::syntax(format!("{}: empty pattern not allowed", G::NAME)));
    }
    let mut tpl = Template::new(pattern);
    let (chain, _) = compile_until::<G>(&mut tpl, false)?;
    Ok(chain)
}

/// Compiles until the end of the template or, inside an alternation, until the
/// `|` or `)` closing the current branch. Returns the terminator consumed.
fn compile_until<G: Grammar>(
    tpl: &mut Template,
    nested: bool,
) -> Result<(Chain<G::Insn>, Option<char>)> {
    let mut steps = Vec::new();
    let mut buf: Vec<char> = Vec::new();

    let terminator = loop {
        let Some(c) = tpl.cur.read() else {
            if nested {
                return Err(Error::syntax(format!("{}: missing ) after @(", G::NAME)));
            }
            break None;
        };
        match c {
            '|' | ')' if nested => break Some(c),
            '%' => match tpl.cur.read() {
                Some('%') => buf.push('%'),
                Some(spec) => {
                    flush(&mut buf, &mut steps);
                    steps.extend(G::specifier(spec, tpl)?);
                }
                None => {
                    return Err(Error::syntax(format!("{}: trailing %", G::NAME)));
                }
            },
            '@' => {
                if !tpl.cur.eat('(') {
                    return Err(Error::syntax(format!("{}: missing ( after @", G::NAME)));
                }
                flush(&mut buf, &mut steps);
                steps.push(alternation::<G>(tpl)?);
            }
            '\\' => match tpl.cur.read() {
                Some(e) if ESCAPABLE.contains(&e) => buf.push(e),
                Some(e) => {
                    return Err(Error::syntax(format!(
                        "{}: invalid escaped character {e}",
                        G::NAME
                    )));
                }
                None => {
                    return Err(Error::syntax(format!("{}: trailing \\", G::NAME)));
                }
            },
            _ => buf.push(c),
        }
    };
    flush(&mut buf, &mut steps);
    Ok((Chain { steps }, terminator))
}

/// Literal runs accumulate between specifiers and become a single step.
fn flush<I>(buf: &mut Vec<char>, steps: &mut Vec<Step<I>>) {
    if !buf.is_empty() {
        steps.push(Step::Literal(std::mem::take(buf)));
    }
}

/// Compiles the branches of `@(...)`; the opening parenthesis is already consumed.
fn alternation<G: Grammar>(tpl: &mut Template) -> Result<Step<G::Insn>> {
    if tpl.depth == MAX_NESTING {
        return Err(Error::syntax(format!("{}: alternation nested too deeply", G::NAME)));
    }
    tpl.depth += 1;
    let mut branches = Vec::new();
    loop {
        let (branch, terminator) = compile_until::<G>(tpl, true)?;
        branches.push(branch);
        if terminator == Some(')') {
            break;
        }
    }
    tpl.depth -= 1;
    if branches.len() == 1 && branches[0].is_empty() {
        return Err(Error::syntax(format!("{}: empty alternatives", G::NAME)));
    }
    Ok(Step::Choice(branches))
}
