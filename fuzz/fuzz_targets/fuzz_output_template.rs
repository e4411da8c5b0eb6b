#![no_main]
use libfuzzer_sys::fuzz_target;
use logpat::{Entry, Template};

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let Ok(template) = Template::compile(data) else {
        return;
    };

    let entry = Entry {
        pid: 7,
        process: "fuzz".into(),
        message: "test".into(),
        words: vec!["a".into(), "b".into()],
        ..Entry::default()
    };
    let _ = template.render(&entry);
    let _ = template.render(&Entry::default());
});
