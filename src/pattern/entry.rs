//! Entry grammar: the top-level pattern matched against whole log lines.
//!
//! | spec | field |
//! |------|-------|
//! | `%t(fmt)` | timestamp, time sub-template (default: RFC 3339-like) |
//! | `%h(fmt)` | host, host sub-template (default `%f`) |
//! | `%l(A,B)` | level, restricted to the listed names (`-` or empty: any) |
//! | `%n` | process name |
//! | `%p` | process id |
//! | `%u` | user |
//! | `%g` | group |
//! | `%b` | run of blanks, discarded |
//! | `%m` | message, rest of the line |
//! | `%w` | one blank- or quote-delimited word |
//! | `%*` | discard up to the next literal rune of the pattern |

use super::class::{is_alpha, is_blank, is_eol, is_letter, is_quote};
use super::cursor::Cursor;
use super::host::HostPattern;
use super::time::TimePattern;
use super::{Chain, Grammar, Instruction, Step, Template, compile, scan};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::internal;

const DEFAULT_HOST: &str = "%f";

#[derive(Debug, Clone)]
pub(crate) enum EntryInsn {
    Time(TimePattern),
    Host(HostPattern),
    /// Sorted allow-list; empty accepts any level.
    Level(Vec<String>),
    Process,
    Pid,
    User,
    Group,
    Blank,
    Message,
    Word,
    /// Discards until this rune, or to the end of the line.
    Discard(Option<char>),
}

impl Instruction for EntryInsn {
    type Target = Entry;

    fn exec(&self, cur: &mut Cursor, e: &mut Entry) -> Result<()> {
        match self {
            Self::Time(time) => e.when = Some(time.scan(cur)?.resolve()?),
            Self::Host(host) => e.host = host.scan(cur)?.to_string(),
            Self::Level(levels) => {
                let level = scan::take_while(cur, 0, is_letter);
                if !levels.is_empty() && levels.binary_search(&level).is_err() {
                    return Err(Error::Mismatch);
                }
                e.level = level;
            }
            Self::Process => set_name(&mut e.process, cur),
            Self::User => set_name(&mut e.user, cur),
            Self::Group => set_name(&mut e.group, cur),
            Self::Pid => e.pid = scan::number(cur, 0)?,
            Self::Blank => scan::skip_while(cur, is_blank),
            Self::Message => e.message = scan::take_while(cur, 0, |_| true),
            Self::Word => word(cur, e)?,
            Self::Discard(Some(until)) => scan::skip_while(cur, |c| c != *until),
            Self::Discard(None) => scan::skip_while(cur, |_| true),
        }
        Ok(())
    }
}

/// Empty runs leave the field untouched.
fn set_name(field: &mut String, cur: &mut Cursor) {
    let name = scan::take_while(cur, 0, is_alpha);
    if !name.is_empty() {
        *field = name;
    }
}

/// A quoted word runs to the matching quote, which must appear before the end
/// of the line. A bare word runs to the next blank.
fn word(cur: &mut Cursor, e: &mut Entry) -> Result<()> {
    let text = match cur.peek() {
        Some(quote) if is_quote(quote) => {
            cur.read();
            let text = scan::take_while(cur, 0, |c| c != quote);
            if is_eol(cur.read()) {
                return Err(Error::Mismatch);
            }
            text
        }
        _ => scan::take_while(cur, 0, |c| !is_blank(c)),
    };
    let text = text.trim();
    if !text.is_empty() {
        e.words.push(text.to_string());
    }
    Ok(())
}

/// Blanks are ignored; `-` or nothing means any level.
fn level_list(arg: &str) -> Vec<String> {
    let arg: String = arg.chars().filter(|&c| !is_blank(c)).collect();
    if arg.is_empty() || arg == "-" {
        return Vec::new();
    }
    let mut levels: Vec<String> = arg
        .split(',')
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();
    levels.sort();
    levels.dedup();
    levels
}

pub(crate) struct EntryGrammar;

impl Grammar for EntryGrammar {
    type Insn = EntryInsn;

    const NAME: &'static str = "pattern";

    fn specifier(spec: char, tpl: &mut Template) -> Result<Vec<Step<EntryInsn>>> {
        let insn = match spec {
            't' => {
                let arg = tpl.argument("time")?.unwrap_or_default();
                EntryInsn::Time(TimePattern::compile(&arg)?)
            }
            'h' => {
                let arg = tpl.argument("host")?.filter(|a| !a.is_empty());
                let arg = arg.as_deref().unwrap_or(DEFAULT_HOST);
                EntryInsn::Host(HostPattern::compile(arg)?)
            }
            'l' => {
                let arg = tpl.argument("level")?.unwrap_or_default();
                EntryInsn::Level(level_list(&arg))
            }
            'n' => EntryInsn::Process,
            'p' => EntryInsn::Pid,
            'u' => EntryInsn::User,
            'g' => EntryInsn::Group,
            'b' => EntryInsn::Blank,
            'm' => EntryInsn::Message,
            'w' => EntryInsn::Word,
            '*' => EntryInsn::Discard(tpl.following()),
            _ => {
                return Err(Error::syntax(format!("unsupported specifier %{spec}")));
            }
        };
        Ok(vec![Step::Exec(insn)])
    }
}

/// Compiled entry pattern, reusable for any number of lines.
///
/// ```
/// use logpat::Pattern;
///
/// let pattern = Pattern::compile("%t %n[%p]: %m").unwrap();
/// let entry = pattern
///     .parse_line("2023-05-01 10:22:31 sshd[1234]: Accepted password")
///     .unwrap();
/// assert_eq!(entry.process, "sshd");
/// assert_eq!(entry.pid, 1234);
/// assert_eq!(entry.message, "Accepted password");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    chain: Chain<EntryInsn>,
}

impl Pattern {
    /// # Errors
    /// `Syntax` when the pattern is empty or malformed; nothing is returned partially compiled.
    pub fn compile(pattern: &str) -> Result<Self> {
        let chain = compile::<EntryGrammar>(pattern).inspect_err(|e| {
            internal::debug("PATTERN", &format!("rejected {pattern:?}: {e}"));
        })?;
        internal::trace("PATTERN", &format!("compiled {pattern:?}"));
        Ok(Self {
            source: pattern.to_string(),
            chain,
        })
    }

    /// The pattern text this was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Runs the chain without recording the raw line.
    pub(crate) fn extract(&self, line: &str) -> Result<Entry> {
        let mut entry = Entry::default();
        self.chain.run(&mut Cursor::new(line), &mut entry)?;
        Ok(entry)
    }

    /// Parses one line into an entry whose `line` is the input verbatim.
    ///
    /// # Errors
    /// `Mismatch` when the line does not fit the pattern, `Number` on integer overflow.
    pub fn parse_line(&self, line: &str) -> Result<Entry> {
        let mut entry = self.extract(line)?;
        entry.line = line.to_string();
        Ok(entry)
    }
}
