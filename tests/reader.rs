use logpat::{Entry, Error, Filter, Pattern, Reader, compile_reader};
use std::io::{self, BufRead, BufReader, Read};

const LOG: &str = "\
10:00:00 sshd[1]: INFO: started
garbage line

10:00:01 sshd[2]: DEBUG: noisy
10:00:02 cron[3]: WARNING: late\r
";

fn reader(input: &str) -> Reader<&[u8]> {
    compile_reader(input.as_bytes(), "%t(%H:%M:%S) %n[%p]: %l(INFO,WARNING): %m", "").unwrap()
}

#[test]
fn skips_empty_mismatched_and_rejected_levels() {
    let mut r = reader(LOG);
    let entries = r.read_all().unwrap();
    let pids: Vec<u32> = entries.iter().map(|e| e.pid).collect();
    assert_eq!(pids, [1, 3]);
    assert_eq!(r.lines_read(), 5);
    assert_eq!(r.lines_skipped(), 3);
}

#[test]
fn raw_line_is_kept_without_terminator() {
    let mut r = reader(LOG);
    let first = r.read().unwrap().unwrap();
    assert_eq!(first.line, "10:00:00 sshd[1]: INFO: started");
    let second = r.read().unwrap().unwrap();
    assert_eq!(second.line, "10:00:02 cron[3]: WARNING: late");
    assert_eq!(second.message, "late");
}

#[test]
fn exhaustion_repeats() {
    let mut r = reader("");
    assert!(r.read().unwrap().is_none());
    assert!(r.read().unwrap().is_none());
}

#[test]
fn last_line_without_newline() {
    let mut r = compile_reader("a\nb".as_bytes(), "%n", "").unwrap();
    let names: Vec<String> = r.read_all().unwrap().into_iter().map(|e| e.process).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn programmatic_filter_skips_without_ending_the_stream() {
    let pattern = Pattern::compile("%n[%p]").unwrap();
    let input = "a[1]\nb[2]\nc[3]\n";
    let mut r = Reader::new(input.as_bytes(), pattern).with_filter(Filter::from_fn(|e| e.pid != 2));
    let names: Vec<String> = r.read_all().unwrap().into_iter().map(|e| e.process).collect();
    assert_eq!(names, ["a", "c"]);
    assert_eq!(r.lines_skipped(), 1);
}

#[test]
fn filter_expressions_do_not_compile() {
    assert!(matches!(
        compile_reader("".as_bytes(), "%m", "level == ERROR"),
        Err(Error::Syntax(_))
    ));
}

#[test]
fn bad_pattern_fails_at_compile() {
    assert!(matches!(compile_reader("".as_bytes(), "%Y", ""), Err(Error::Syntax(_))));
}

#[test]
fn number_overflow_is_sticky() {
    let input = "1\n99999999999\n3\n";
    let mut r = compile_reader(input.as_bytes(), "%p", "").unwrap();
    assert_eq!(r.read().unwrap().map(|e| e.pid), Some(1));
    assert!(matches!(r.read(), Err(Error::Number(_))));
    assert!(matches!(r.read(), Err(Error::Number(_))));
    assert_eq!(r.lines_read(), 2);
}

/// Yields one good line, then fails.
struct Flaky {
    served: bool,
}

impl Read for Flaky {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::other("disk on fire"));
        }
        self.served = true;
        let line = b"ok\n";
        buf[..line.len()].copy_from_slice(line);
        Ok(line.len())
    }
}

fn flaky() -> impl BufRead {
    BufReader::new(Flaky { served: false })
}

#[test]
fn io_failure_is_sticky() {
    let mut r = compile_reader(flaky(), "%n", "").unwrap();
    assert_eq!(r.read().unwrap().map(|e| e.process), Some("ok".to_string()));
    assert!(matches!(r.read(), Err(Error::Io(_))));
    assert!(matches!(r.read(), Err(Error::Io(_))));
}

#[test]
fn read_all_reports_the_failure() {
    let mut r = compile_reader(flaky(), "%n", "").unwrap();
    assert!(matches!(r.read_all(), Err(Error::Io(_))));
}

#[test]
fn iterator_yields_error_once() {
    let r = compile_reader(flaky(), "%n", "").unwrap();
    let items: Vec<Result<Entry, Error>> = r.collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(matches!(items[1], Err(Error::Io(_))));
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let input: &[u8] = b"caf\xff[9]\n";
    let mut r = compile_reader(input, "%m", "").unwrap();
    let e = r.read().unwrap().unwrap();
    assert_eq!(e.message, "caf\u{fffd}[9]");
}
