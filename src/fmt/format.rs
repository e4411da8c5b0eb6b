//! Output templates: the inverse of an entry pattern, rendering an [`Entry`] back to text.
//!
//! | spec | field |
//! |------|-------|
//! | `%t` | timestamp, RFC 3339 to whole seconds |
//! | `%n` | process name |
//! | `%p` | process id |
//! | `%u` | user |
//! | `%g` | group |
//! | `%h` | host |
//! | `%l` | level |
//! | `%m` | message |
//! | `%#` | raw source line |
//! | `%N` | word `N` (0-based, decimal) |
//! | `%%` | literal `%` |

use crate::entry::Entry;
use crate::error::{Error, Result};
use chrono::SecondsFormat;

/// Rendered in place of a field that is empty or zero.
pub const SENTINEL: &str = "N/A";

/// Closed set of entry fields a template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Time,
    Process,
    Pid,
    User,
    Group,
    Host,
    Level,
    Message,
    Line,
    Word(usize),
}

impl Placeholder {
    const fn from_spec(spec: char) -> Option<Self> {
        Some(match spec {
            't' => Self::Time,
            'n' => Self::Process,
            'p' => Self::Pid,
            'u' => Self::User,
            'g' => Self::Group,
            'h' => Self::Host,
            'l' => Self::Level,
            'm' => Self::Message,
            '#' => Self::Line,
            _ => return None,
        })
    }

    fn render_into(self, entry: &Entry, out: &mut String) {
        let text = match self {
            Self::Time => entry
                .when
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Self::Pid => (entry.pid != 0).then(|| entry.pid.to_string()),
            Self::Process => non_empty(&entry.process),
            Self::User => non_empty(&entry.user),
            Self::Group => non_empty(&entry.group),
            Self::Host => non_empty(&entry.host),
            Self::Level => non_empty(&entry.level),
            Self::Message => non_empty(&entry.message),
            Self::Line => non_empty(&entry.line),
            Self::Word(i) => entry.word(i).and_then(non_empty),
        };
        out.push_str(text.as_deref().unwrap_or(SENTINEL));
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Compiled template piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Compiled output template; compile once, render for every entry.
///
/// ```
/// use logpat::{Entry, Template};
///
/// let tpl = Template::compile("%n[%p]: %m").unwrap();
/// let entry = Entry { process: "sshd".into(), pid: 7, ..Entry::default() };
/// assert_eq!(tpl.render(&entry), "sshd[7]: N/A");
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<FormatSegment>,
}

impl Template {
    /// # Errors
    /// `Syntax` for an empty template, an unknown specifier, a trailing `%`, or a
    /// word index that does not fit in `usize`.
    pub fn compile(template: &str) -> Result<Self> {
        if template.is_empty() {
            return Err(Error::syntax("output: empty template not allowed"));
        }
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            let placeholder = match chars.next() {
                Some('%') => {
                    literal.push('%');
                    continue;
                }
                Some(d) if d.is_ascii_digit() => {
                    let mut index = String::from(d);
                    while let Some(&d) = chars.peek()
                        && d.is_ascii_digit()
                    {
                        index.push(d);
                        chars.next();
                    }
                    let index = index.parse().map_err(|_| {
                        Error::syntax(format!("output: word index too large: %{index}"))
                    })?;
                    Placeholder::Word(index)
                }
                Some(spec) => Placeholder::from_spec(spec).ok_or_else(|| {
                    Error::syntax(format!("output: unsupported specifier %{spec}"))
                })?,
                None => return Err(Error::syntax("output: trailing %")),
            };
            if !literal.is_empty() {
                segments.push(FormatSegment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(FormatSegment::Placeholder(placeholder));
        }

        if !literal.is_empty() {
            segments.push(FormatSegment::Literal(literal));
        }
        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Appends the rendered entry to `out`, without a line terminator.
    pub fn render_into(&self, entry: &Entry, out: &mut String) {
        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => out.push_str(s),
                FormatSegment::Placeholder(ph) => ph.render_into(entry, out),
            }
        }
    }

    #[must_use]
    pub fn render(&self, entry: &Entry) -> String {
        let mut out = String::new();
        self.render_into(entry, &mut out);
        out
    }
}
