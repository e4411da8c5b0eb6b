#![no_main]
use libfuzzer_sys::fuzz_target;
use logpat::{DEFAULT_PATTERN, Pattern, compile_reader};

const PATTERNS: &[&str] = &[
    DEFAULT_PATTERN,
    "%t %n[%p]: %m",
    "%h(@(%F|%S|%Q)) %w %w %m",
    "%t(%a %b %d %H:%M:%S %y) %*: %m",
    "%t(%s.%f) %l(ERROR,WARN) %m",
];

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);
    for pattern in PATTERNS {
        let p = Pattern::compile(pattern).unwrap();
        let _ = p.parse_line(&line);
    }
    // Also exercise the line splitter on raw bytes
    let mut r = compile_reader(data, "%m", "").unwrap();
    let _ = r.read_all();
});
