use super::*;

#[test]
fn max_connections_defaults_when_unset() {
    assert_eq!(parse_max_connections(None), DEFAULT_MAX_CONNECTIONS);
}

#[test]
fn max_connections_parses_positive_values() {
    assert_eq!(parse_max_connections(Some("12")), 12);
    assert_eq!(parse_max_connections(Some(" 3 ")), 3);
}

#[test]
fn max_connections_rejects_zero_and_junk() {
    assert_eq!(parse_max_connections(Some("0")), DEFAULT_MAX_CONNECTIONS);
    assert_eq!(parse_max_connections(Some("lots")), DEFAULT_MAX_CONNECTIONS);
    assert_eq!(parse_max_connections(Some("-4")), DEFAULT_MAX_CONNECTIONS);
}
