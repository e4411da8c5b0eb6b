//! Host/address sub-grammar.
//!
//! | spec | field |
//! |------|-------|
//! | `%4` | IPv4 address, optionally in brackets |
//! | `%6` | IPv6 address, optionally in brackets |
//! | `%p` | port |
//! | `%f` | fully qualified domain name |
//! | `%h` | short hostname |
//! | `%m` | net mask |
//! | `%F` | `%4:%p` |
//! | `%S` | `%6:%p` |
//! | `%Q` | `%f:%p` |

use super::class::{is_alpha, is_digit, is_hex};
use super::cursor::Cursor;
use super::{Chain, Grammar, Instruction, Step, Template, compile, scan};
use crate::error::{Error, Result};
use std::fmt;
use std::net::Ipv4Addr;

const IPV4_PORT: &str = "%4:%p";
const IPV6_PORT: &str = "%6:%p";
const FQDN_PORT: &str = "%f:%p";

const IPV6_GROUPS: usize = 8;
const MAX_MASK: u32 = 32;

/// Address parts captured by a host chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Host {
    pub name: Option<String>,
    pub addr: String,
    pub mask: u8,
    pub port: u16,
}

/// A symbolic name wins; otherwise `addr:port`.
impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}:{}", self.addr, self.port),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostInsn {
    Ipv4,
    Ipv6,
    Port,
    Fqdn,
    Hostname,
    Mask,
}

impl Instruction for HostInsn {
    type Target = Host;

    fn exec(&self, cur: &mut Cursor, h: &mut Host) -> Result<()> {
        match self {
            Self::Ipv4 => h.addr = bracketed(cur, ipv4)?,
            Self::Ipv6 => h.addr = bracketed(cur, ipv6)?,
            Self::Port => {
                let port = bounded(cur, 10, u32::from(u16::MAX))?;
                h.port = u16::try_from(port).map_err(|_| Error::Mismatch)?;
            }
            Self::Mask => {
                let mask = bounded(cur, 10, MAX_MASK)?;
                h.mask = u8::try_from(mask).map_err(|_| Error::Mismatch)?;
            }
            Self::Fqdn => h.name = Some(fqdn(cur)?),
            Self::Hostname => h.name = Some(scan::take_run(cur, 0, is_alpha)?),
        }
        Ok(())
    }
}

/// Greedy digit run in `radix`, rejected as a whole when above `max`.
/// Surplus digits are never left behind for the next step.
fn bounded(cur: &mut Cursor, radix: u32, max: u32) -> Result<u32> {
    let accept = |c: char| if radix == 16 { is_hex(c) } else { is_digit(c) };
    let run = scan::digits(cur, 0, accept)?;
    match u32::from_str_radix(&run, radix) {
        Ok(value) if value <= max => Ok(value),
        _ => Err(Error::Mismatch),
    }
}

/// Runs `inner` with optional surrounding brackets; an opened bracket must close.
fn bracketed(cur: &mut Cursor, inner: fn(&mut Cursor) -> Result<String>) -> Result<String> {
    let open = cur.eat('[');
    let addr = inner(cur)?;
    if open {
        scan::expect(cur, ']')?;
    }
    Ok(addr)
}

fn ipv4(cur: &mut Cursor) -> Result<String> {
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        if i > 0 {
            scan::expect(cur, '.')?;
        }
        let value = bounded(cur, 10, u32::from(u8::MAX))?;
        *octet = u8::try_from(value).map_err(|_| Error::Mismatch)?;
    }
    Ok(Ipv4Addr::from(octets).to_string())
}

/// Keeps `::` as written; groups are rendered in lowercase without leading zeros.
fn ipv6(cur: &mut Cursor) -> Result<String> {
    let mut text = String::new();
    let mut groups = 0;
    let mut compressed = false;

    if cur.peek() == Some(':') && cur.peek_at(1) == Some(':') {
        cur.read();
        cur.read();
        text.push_str("::");
        compressed = true;
    }

    while groups < IPV6_GROUPS && cur.peek().is_some_and(is_hex) {
        let group = bounded(cur, 16, u32::from(u16::MAX))?;
        text.push_str(&format!("{group:x}"));
        groups += 1;

        if !cur.eat(':') {
            break;
        }
        if cur.peek() == Some(':') {
            if compressed {
                cur.unread();
                break;
            }
            cur.read();
            text.push_str("::");
            compressed = true;
            continue;
        }
        if !cur.peek().is_some_and(is_hex) {
            // the colon belongs to whatever follows the address
            cur.unread();
            break;
        }
        text.push(':');
    }

    if groups == 0 && !compressed {
        return Err(Error::Mismatch);
    }
    Ok(text)
}

/// Labels separated by dots; a dot not followed by a label ends the name.
fn fqdn(cur: &mut Cursor) -> Result<String> {
    let mut name = scan::take_run(cur, 0, is_alpha)?;
    while cur.peek() == Some('.') && cur.peek_at(1).is_some_and(is_alpha) {
        cur.read();
        name.push('.');
        name.push_str(&scan::take_while(cur, 0, is_alpha));
    }
    Ok(name)
}

pub(crate) struct HostGrammar;

impl Grammar for HostGrammar {
    type Insn = HostInsn;

    const NAME: &'static str = "host";

    fn specifier(spec: char, _tpl: &mut Template) -> Result<Vec<Step<HostInsn>>> {
        let insn = match spec {
            'F' => return Ok(compile::<Self>(IPV4_PORT)?.into_steps()),
            'S' => return Ok(compile::<Self>(IPV6_PORT)?.into_steps()),
            'Q' => return Ok(compile::<Self>(FQDN_PORT)?.into_steps()),
            '4' => HostInsn::Ipv4,
            '6' => HostInsn::Ipv6,
            'p' => HostInsn::Port,
            'f' => HostInsn::Fqdn,
            'h' => HostInsn::Hostname,
            'm' => HostInsn::Mask,
            _ => {
                return Err(Error::syntax(format!("host: unknown specifier %{spec}")));
            }
        };
        Ok(vec![Step::Exec(insn)])
    }
}

/// Compiled host template.
#[derive(Debug, Clone)]
pub struct HostPattern {
    chain: Chain<HostInsn>,
}

impl HostPattern {
    /// # Errors
    /// `Syntax` on an unknown specifier or malformed template.
    pub fn compile(template: &str) -> Result<Self> {
        Ok(Self {
            chain: compile::<HostGrammar>(template)?,
        })
    }

    pub(crate) fn scan(&self, cur: &mut Cursor) -> Result<Host> {
        let mut h = Host::default();
        self.chain.run(cur, &mut h)?;
        Ok(h)
    }

    /// Parses `text` as a whole; trailing input is ignored.
    ///
    /// # Errors
    /// `Mismatch` when `text` does not have the template's shape.
    pub fn parse(&self, text: &str) -> Result<Host> {
        self.scan(&mut Cursor::new(text))
    }
}
