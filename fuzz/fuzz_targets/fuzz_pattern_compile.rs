#![no_main]
use libfuzzer_sys::fuzz_target;
use logpat::{HostPattern, Pattern, TimePattern};

fuzz_target!(|data: &str| {
    // Must not panic on any pattern string; every grammar shares the compiler
    if let Ok(p) = Pattern::compile(data) {
        let _ = p.parse_line(data);
    }
    let _ = TimePattern::compile(data);
    let _ = HostPattern::compile(data);
});
