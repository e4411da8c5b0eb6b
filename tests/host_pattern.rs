use logpat::{Error, Host, HostPattern};

fn parse(template: &str, text: &str) -> Result<Host, Error> {
    HostPattern::compile(template)?.parse(text)
}

#[test]
fn ipv4_with_port() {
    let h = parse("%4:%p", "192.168.1.10:22").unwrap();
    assert_eq!(h.addr, "192.168.1.10");
    assert_eq!(h.port, 22);
    assert_eq!(h.to_string(), "192.168.1.10:22");
}

#[test]
fn ipv4_shorthand_and_brackets() {
    let h = parse("%F", "[10.0.0.1]:8080").unwrap();
    assert_eq!(h.to_string(), "10.0.0.1:8080");
}

#[test]
fn ipv4_rejects_bad_octets() {
    assert!(matches!(parse("%4", "256.1.1.1"), Err(Error::Mismatch)));
    assert!(matches!(parse("%4", "10.0.0"), Err(Error::Mismatch)));
    assert!(matches!(parse("%4", "[10.0.0.1"), Err(Error::Mismatch)));
}

#[test]
fn port_range() {
    assert_eq!(parse("%p", "65535").unwrap().port, 65535);
    assert!(matches!(parse("%p", "65536"), Err(Error::Mismatch)));
}

#[test]
fn mask_range() {
    assert_eq!(parse("%4/%m", "10.0.0.0/8").unwrap().mask, 8);
    assert!(matches!(parse("%4/%m", "10.0.0.0/33"), Err(Error::Mismatch)));
}

#[test]
fn ipv6_forms() {
    assert_eq!(parse("%6", "fe80::1").unwrap().addr, "fe80::1");
    assert_eq!(parse("%6", "::1").unwrap().addr, "::1");
    assert_eq!(parse("%6", "2001:DB8:0:0:0:0:0:1").unwrap().addr, "2001:db8:0:0:0:0:0:1");
    let h = parse("%S", "[::1]:443").unwrap();
    assert_eq!((h.addr.as_str(), h.port), ("::1", 443));
}

#[test]
fn ipv6_leaves_trailing_colon() {
    let h = parse("%6: %h", "fe80::1: gw").unwrap();
    assert_eq!(h.addr, "fe80::1");
    assert_eq!(h.name.as_deref(), Some("gw"));
}

#[test]
fn fqdn_and_hostname() {
    let h = parse("%f", "mail.example.com.").unwrap();
    assert_eq!(h.to_string(), "mail.example.com");
    let h = parse("%h", "mail.example.com").unwrap();
    assert_eq!(h.to_string(), "mail");
    let h = parse("%Q", "db-1.internal:5432").unwrap();
    assert_eq!(h.to_string(), "db-1.internal");
    assert_eq!(h.port, 5432);
}

#[test]
fn alternation_falls_back_to_fqdn() {
    let h = parse("@(%4|%f)", "example.com").unwrap();
    assert_eq!(h.to_string(), "example.com");
    let h = parse("@(%4|%f)", "127.0.0.1").unwrap();
    assert_eq!(h.addr, "127.0.0.1");
    assert_eq!(h.name, None);
}

#[test]
fn unknown_specifier_is_a_syntax_error() {
    assert!(matches!(HostPattern::compile("%x"), Err(Error::Syntax(_))));
}

#[test]
fn over_long_numbers_are_not_truncated() {
    assert!(matches!(parse("%4", "10.0.0.2555"), Err(Error::Mismatch)));
    assert!(matches!(parse("%4", "10.0.0001.1"), Ok(ref h) if h.addr == "10.0.1.1"));
    assert!(matches!(parse("%4/%m", "10.0.0.0/240"), Err(Error::Mismatch)));
    assert!(matches!(parse("%4:%p", "10.0.0.1:123456"), Err(Error::Mismatch)));
    assert!(matches!(parse("%6", "12345::1"), Err(Error::Mismatch)));
    assert!(matches!(parse("%p", "99999999999999999999"), Err(Error::Mismatch)));
}
