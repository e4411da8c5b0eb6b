//! Timestamp sub-grammar.
//!
//! | spec | field |
//! |------|-------|
//! | `%y` | year, 4 digits |
//! | `%m` | month, 2 digits |
//! | `%b` | month name, 3 letters |
//! | `%a` | day name, 3 letters (checked, not stored) |
//! | `%d` | day, 2 digits |
//! | `%j` | day of year, 3 digits |
//! | `%H` | hour, 2 digits |
//! | `%M` | minute, 2 digits |
//! | `%S` | second, 2 digits |
//! | `%f` | fraction of second, up to 9 significant digits |
//! | `%s` | Unix timestamp |
//! | `%Z` | zone: `Z`, `+hh`, `+hhmm`, `+hh:mm` |
//! | `%I` | `%y-%m-%d %H:%M:%S%Z` |
//! | `%R` | `%y-%m-%dT%H:%M:%S%Z` |

use super::class::{is_digit, is_letter};
use super::cursor::Cursor;
use super::{Chain, Grammar, Instruction, Step, Template, compile, scan};
use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

const ISO_PATTERN: &str = "%y-%m-%d %H:%M:%S%Z";
const RFC_PATTERN: &str = "%y-%m-%dT%H:%M:%S%Z";

/// Used for an empty template: RFC 3339 with either `T` or a blank between
/// date and time, and optional fraction and zone.
const DEFAULT_PATTERN: &str = "%y-%m-%d@(T| )%H:%M:%S@(.%f|)@(%Z|)";

/// Sorted for binary search.
static DAYS: [&str; 7] = ["fri", "mon", "sat", "sun", "thu", "tue", "wed"];

/// Sorted by name for binary search, paired with the calendar month.
static MONTHS: [(&str, u32); 12] = [
    ("apr", 4),
    ("aug", 8),
    ("dec", 12),
    ("feb", 2),
    ("jan", 1),
    ("jul", 7),
    ("jun", 6),
    ("mar", 3),
    ("may", 5),
    ("nov", 11),
    ("oct", 10),
    ("sep", 9),
];

/// Raw components captured by a time chain, resolved once the chain succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct When {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Nanoseconds.
    pub fraction: u32,
    /// Seconds east of UTC.
    pub offset: i32,
    pub year_day: Option<u32>,
    pub unix: Option<i64>,
}

impl When {
    /// Builds the absolute instant.
    ///
    /// A captured Unix timestamp wins over everything else. Missing year, month
    /// and day default to 1, and a captured day of year moves the date onto it.
    ///
    /// # Errors
    /// `Mismatch` when the components do not form a valid date and time.
    pub fn resolve(&self) -> Result<DateTime<FixedOffset>> {
        if let Some(unix) = self.unix {
            return DateTime::from_timestamp(unix, 0)
                .map(|t| t.fixed_offset())
                .ok_or(Error::Mismatch);
        }

        let zone = if self.offset == 0 {
            Utc.fix()
        } else {
            FixedOffset::east_opt(self.offset).ok_or(Error::Mismatch)?
        };

        let mut date = NaiveDate::from_ymd_opt(
            self.year.unwrap_or(1),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
        )
        .ok_or(Error::Mismatch)?;

        if let Some(year_day) = self.year_day.filter(|&d| d > 0) {
            let ordinal = date.ordinal();
            date = if year_day >= ordinal {
                date.checked_add_days(Days::new(u64::from(year_day - ordinal)))
            } else {
                date.checked_sub_days(Days::new(u64::from(ordinal - year_day)))
            }
            .ok_or(Error::Mismatch)?;
        }

        let time = NaiveTime::from_hms_nano_opt(self.hour, self.minute, self.second, self.fraction)
            .ok_or(Error::Mismatch)?;

        zone.from_local_datetime(&date.and_time(time))
            .single()
            .ok_or(Error::Mismatch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeInsn {
    Year,
    Month,
    MonthName,
    DayName,
    Day,
    YearDay,
    Hour,
    Minute,
    Second,
    Fraction,
    Unix,
    Zone,
}

impl Instruction for TimeInsn {
    type Target = When;

    fn exec(&self, cur: &mut Cursor, w: &mut When) -> Result<()> {
        match self {
            Self::Year => w.year = Some(scan::number(cur, 4)?),
            Self::Month => w.month = Some(scan::number(cur, 2)?),
            Self::Day => w.day = Some(scan::number(cur, 2)?),
            Self::YearDay => w.year_day = Some(scan::number(cur, 3)?),
            Self::Hour => w.hour = scan::number(cur, 2)?,
            Self::Minute => w.minute = scan::number(cur, 2)?,
            Self::Second => w.second = scan::number(cur, 2)?,
            Self::Unix => w.unix = Some(scan::number(cur, 0)?),
            Self::Fraction => w.fraction = fraction(cur)?,
            Self::MonthName => w.month = Some(month_name(cur)?),
            Self::DayName => day_name(cur)?,
            Self::Zone => zone(cur, w)?,
        }
        Ok(())
    }
}

/// Scales by digit count: `5` is 500ms, `05` is 50ms, `123456789` is 123456789ns.
/// Digits past nanosecond precision are consumed and dropped.
fn fraction(cur: &mut Cursor) -> Result<u32> {
    let run = scan::digits(cur, 0, is_digit)?;
    let mut nanos: String = run.chars().take(9).collect();
    while nanos.len() < 9 {
        nanos.push('0');
    }
    Ok(nanos.parse()?)
}

fn month_name(cur: &mut Cursor) -> Result<u32> {
    let name = scan::take_exact(cur, 3, is_letter)?.to_ascii_lowercase();
    MONTHS
        .binary_search_by(|(m, _)| (*m).cmp(name.as_str()))
        .map(|i| MONTHS[i].1)
        .map_err(|_| Error::Mismatch)
}

fn day_name(cur: &mut Cursor) -> Result<()> {
    let name = scan::take_exact(cur, 3, is_letter)?.to_ascii_lowercase();
    DAYS.binary_search(&name.as_str())
        .map(|_| ())
        .map_err(|_| Error::Mismatch)
}

/// `Z`, or a sign followed by hours and optional minutes.
fn zone(cur: &mut Cursor, w: &mut When) -> Result<()> {
    let sign = match cur.peek() {
        Some('Z') => {
            cur.read();
            w.offset = 0;
            return Ok(());
        }
        Some('+') => 1,
        Some('-') => -1,
        _ => return Err(Error::Mismatch),
    };
    cur.read();
    let hours: i32 = scan::number(cur, 2)?;
    cur.eat(':');
    let minutes: i32 = if cur.peek().is_some_and(is_digit) {
        scan::number(cur, 2)?
    } else {
        0
    };
    w.offset = sign * (hours * 3600 + minutes * 60);
    Ok(())
}

pub(crate) struct TimeGrammar;

impl Grammar for TimeGrammar {
    type Insn = TimeInsn;

    const NAME: &'static str = "time";

    fn specifier(spec: char, _tpl: &mut Template) -> Result<Vec<Step<TimeInsn>>> {
        let insn = match spec {
            'I' => return Ok(compile::<Self>(ISO_PATTERN)?.into_steps()),
            'R' => return Ok(compile::<Self>(RFC_PATTERN)?.into_steps()),
            'y' => TimeInsn::Year,
            'm' => TimeInsn::Month,
            'b' => TimeInsn::MonthName,
            'a' => TimeInsn::DayName,
            'd' => TimeInsn::Day,
            'j' => TimeInsn::YearDay,
            'H' => TimeInsn::Hour,
            'M' => TimeInsn::Minute,
            'S' => TimeInsn::Second,
            'f' => TimeInsn::Fraction,
            's' => TimeInsn::Unix,
            'Z' => TimeInsn::Zone,
            _ => {
                return Err(Error::syntax(format!("time: unknown specifier %{spec}")));
            }
        };
        Ok(vec![Step::Exec(insn)])
    }
}

/// Compiled time template.
#[derive(Debug, Clone)]
pub struct TimePattern {
    chain: Chain<TimeInsn>,
}

impl TimePattern {
    /// An empty template compiles the default RFC 3339-like form.
    ///
    /// # Errors
    /// `Syntax` on an unknown specifier or malformed template.
    pub fn compile(template: &str) -> Result<Self> {
        let template = if template.is_empty() {
            DEFAULT_PATTERN
        } else {
            template
        };
        Ok(Self {
            chain: compile::<TimeGrammar>(template)?,
        })
    }

    /// Runs the chain at the cursor and returns the raw components.
    pub(crate) fn scan(&self, cur: &mut Cursor) -> Result<When> {
        let mut w = When::default();
        self.chain.run(cur, &mut w)?;
        Ok(w)
    }

    /// Parses `text` as a whole; trailing input is ignored.
    ///
    /// # Errors
    /// `Mismatch` when `text` does not have the template's shape.
    pub fn parse(&self, text: &str) -> Result<DateTime<FixedOffset>> {
        let mut cur = Cursor::new(text);
        self.scan(&mut cur)?.resolve()
    }
}
