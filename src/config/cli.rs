use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the storefront binary.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Storefront sitemap server")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "STOREFRONT_CONFIG_FILE",
        value_name = "PATH"
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Serve sitemap.xml, numbered sitemap pages and robots.txt.
    Serve(Box<ServeArgs>),
    /// Write the sitemap (or one numbered page) to a file or stdout.
    Generate(GenerateArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub overrides: ServeOverrides,
}

/// Overrides shared by every command.
#[derive(Debug, Args, Default, Clone)]
pub struct CommonOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Override the store id used to scope catalog data.
    #[arg(long = "store-id", value_name = "ID")]
    pub store_id: Option<u32>,

    /// Override the public store host (optionally with port).
    #[arg(long = "store-host", value_name = "HOST")]
    pub store_host: Option<String>,

    /// Override the application path base, e.g. `/shop`.
    #[arg(long = "store-path-base", value_name = "PATH")]
    pub store_path_base: Option<String>,

    /// Force https URLs.
    #[arg(
        long = "force-ssl",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub force_ssl: Option<bool>,

    /// Override the catalog snapshot file.
    #[arg(long = "catalog-path", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub catalog_path: Option<PathBuf>,

    /// Override the maximum number of URLs per sitemap file.
    #[arg(long = "sitemap-max-urls-per-page", value_name = "COUNT")]
    pub sitemap_max_urls_per_page: Option<usize>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeOverrides {
    #[command(flatten)]
    pub common: CommonOverrides,

    /// Override the listener host.
    #[arg(long = "server-host", value_name = "HOST")]
    pub server_host: Option<String>,

    /// Override the listener port.
    #[arg(long = "server-port", value_name = "PORT")]
    pub server_port: Option<u16>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub overrides: CommonOverrides,

    /// 1-based sitemap page; the root document is written when omitted.
    #[arg(long, value_name = "N")]
    pub page: Option<u32>,

    /// Output file; stdout when omitted.
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
