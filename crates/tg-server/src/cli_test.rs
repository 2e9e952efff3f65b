use super::*;

#[test]
fn test_defaults() {
    let args = ServeArgs::try_parse_from(["tg-server"]).unwrap();
    assert_eq!(args.host, "0.0.0.0");
    assert_eq!(args.port, 8000);
    assert_eq!(args.dialect, "generic");
}

#[test]
fn test_flag_overrides() {
    let args = ServeArgs::try_parse_from([
        "tg-server",
        "--host",
        "127.0.0.1",
        "--port",
        "9000",
        "--dialect",
        "snowflake",
    ])
    .unwrap();
    assert_eq!(args.host, "127.0.0.1");
    assert_eq!(args.port, 9000);
    assert_eq!(args.dialect, "snowflake");
}

#[test]
fn test_invalid_port_rejected() {
    assert!(ServeArgs::try_parse_from(["tg-server", "--port", "notaport"]).is_err());
}
