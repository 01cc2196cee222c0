use std::io::Write;

use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        common: CommonOverrides {
            log_level: Some("debug".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_are_valid() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.store.id, 1);
    assert_eq!(settings.store.host, "localhost:3000");
    assert_eq!(settings.store.path_base, "");
    assert!(!settings.security.force_ssl);
    assert!(settings.sitemap.enabled);
    assert_eq!(settings.sitemap.max_urls_per_page.get(), 50_000);
    assert!(settings.sitemap.custom_urls.is_empty());
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = CommonOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_common_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn path_base_is_normalized() {
    assert_eq!(normalize_path_base("/shop/"), "/shop");
    assert_eq!(normalize_path_base("shop"), "/shop");
    assert_eq!(normalize_path_base("/"), "");
    assert_eq!(normalize_path_base(""), "");
}

#[test]
fn rejects_page_size_out_of_range() {
    for value in [0, 50_001] {
        let mut raw = RawSettings::default();
        raw.sitemap.max_urls_per_page = Some(value);
        let err = Settings::from_raw(raw).expect_err("invalid page size");
        assert!(matches!(
            err,
            LoadError::Invalid {
                key: "sitemap.max_urls_per_page",
                ..
            }
        ));
    }
}

#[test]
fn rejects_host_with_path() {
    let mut raw = RawSettings::default();
    raw.store.host = Some("shop.example/shop".to_string());
    let err = Settings::from_raw(raw).expect_err("host with path");
    assert!(matches!(err, LoadError::Invalid { key: "store.host", .. }));
}

#[test]
fn blank_custom_urls_are_dropped() {
    let mut raw = RawSettings::default();
    raw.sitemap.custom_urls = Some(vec![
        " /promo ".to_string(),
        "   ".to_string(),
        "https://blog.example/".to_string(),
    ]);
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(
        settings.sitemap.custom_urls,
        vec!["/promo".to_string(), "https://blog.example/".to_string()]
    );
}

#[test]
fn config_file_layers_under_cli() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(
        file,
        r#"
[store]
id = 3
host = "shop.example"
path_base = "/shop/"

[security]
force_ssl = true

[sitemap]
include_products = false
custom_urls = ["/promo"]
"#
    )
    .expect("write config");

    let args = CliArgs::parse_from([
        "storefront",
        "--config-file",
        file.path().to_str().expect("utf-8 path"),
        "generate",
        "--store-id",
        "7",
        "--page",
        "2",
    ]);
    let settings = load(&args).expect("settings");

    assert_eq!(settings.store.id, 7);
    assert_eq!(settings.store.host, "shop.example");
    assert_eq!(settings.store.path_base, "/shop");
    assert!(settings.security.force_ssl);
    assert!(!settings.sitemap.include_products);
    assert_eq!(settings.sitemap.custom_urls, vec!["/promo".to_string()]);
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["storefront"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_generate_arguments() {
    let args = CliArgs::parse_from([
        "storefront",
        "generate",
        "--page",
        "3",
        "-o",
        "/tmp/sitemap-3.xml",
        "--force-ssl",
        "yes",
    ]);

    match args.command.expect("generate command") {
        Command::Generate(generate) => {
            assert_eq!(generate.page, Some(3));
            assert_eq!(
                generate.output.as_deref(),
                Some(std::path::Path::new("/tmp/sitemap-3.xml"))
            );
            assert_eq!(generate.overrides.force_ssl, Some(true));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "storefront",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--store-host",
        "shop.example",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(
                serve.overrides.common.store_host.as_deref(),
                Some("shop.example")
            );
        }
        _ => panic!("wrong command parsed"),
    }
}
