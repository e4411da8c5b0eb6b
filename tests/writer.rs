use chrono::{FixedOffset, TimeZone};
use logpat::fmt::{FormatSegment, Placeholder, SENTINEL};
use logpat::{Entry, Error, JsonWriter, Output, Pattern, Template, compile_writer};

fn sample() -> Entry {
    Pattern::compile("%t %u %h %n[%p] %l %w %w %m")
        .unwrap()
        .parse_line("2023-05-01T10:22:31+02:00 bob gw.lan sshd[42] INFO alpha beta the rest")
        .unwrap()
}

fn written(template: &str, entry: &Entry) -> String {
    let mut w = compile_writer(Vec::new(), template).unwrap();
    w.write(entry).unwrap();
    String::from_utf8(w.into_inner()).unwrap()
}

#[test]
fn empty_message_renders_sentinel() {
    assert_eq!(written("%m", &Entry::default()), "N/A\n");
    assert_eq!(SENTINEL, "N/A");
}

#[test]
fn unset_fields_render_sentinel() {
    let e = Entry::default();
    assert_eq!(
        Template::compile("%t|%n|%p|%u|%g|%h|%l|%#|%0").unwrap().render(&e),
        "N/A|N/A|N/A|N/A|N/A|N/A|N/A|N/A|N/A"
    );
}

#[test]
fn every_field() {
    let e = sample();
    assert_eq!(
        Template::compile("%t %u %h %n %p %l %0 %1 %m").unwrap().render(&e),
        "2023-05-01T10:22:31+02:00 bob gw.lan sshd 42 INFO alpha beta the rest"
    );
    assert_eq!(Template::compile("%#").unwrap().render(&e), e.line);
    assert_eq!(Template::compile("[%2]").unwrap().render(&e), "[N/A]");
}

#[test]
fn utc_renders_with_z() {
    let e = Entry {
        when: Some(FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
        ..Entry::default()
    };
    assert_eq!(written("%t", &e), "2024-01-02T03:04:05Z\n");
}

#[test]
fn percent_and_multi_digit_index() {
    let e = Entry {
        words: (0..12).map(|i| i.to_string()).collect(),
        ..Entry::default()
    };
    assert_eq!(Template::compile("%11 100%%").unwrap().render(&e), "11 100%");
}

#[test]
fn segments_are_compiled_once() {
    let t = Template::compile("%n: %m").unwrap();
    assert_eq!(
        t.segments(),
        [
            FormatSegment::Placeholder(Placeholder::Process),
            FormatSegment::Literal(": ".to_string()),
            FormatSegment::Placeholder(Placeholder::Message),
        ]
    );
}

#[test]
fn template_syntax_errors() {
    for bad in ["", "%", "abc%", "%z", "%99999999999999999999999"] {
        assert!(
            matches!(Template::compile(bad), Err(Error::Syntax(_))),
            "{bad:?} should not compile"
        );
    }
    assert!(compile_writer(Vec::new(), "%q").is_err());
}

#[test]
fn json_lines_omit_the_raw_line() {
    let e = sample();
    let mut w = JsonWriter::new(Vec::new());
    w.write(&e).unwrap();
    w.write(&Entry::default()).unwrap();
    let out = String::from_utf8(w.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let v: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert!(v.get("line").is_none());
    assert_eq!(v["process"], "sshd");
    assert_eq!(v["pid"], 42);
    assert_eq!(v["words"], serde_json::json!(["alpha", "beta"]));
    assert_eq!(v["when"], "2023-05-01T10:22:31+02:00");

    let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert!(v["when"].is_null());
}
