use std::{process, sync::Arc};

use storefront::{
    application::{
        error::AppError,
        sitemap::{SitemapOptions, SitemapService},
    },
    config,
    infra::{
        catalog::FileCatalog,
        error::InfraError,
        http::{self, HttpState},
        routes::RouteTable,
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging)?;

    let sitemap = build_sitemap_service(&settings).await?;

    match command {
        config::Command::Serve(_) => serve_http(&settings, sitemap).await,
        config::Command::Generate(args) => run_generate(sitemap, args).await,
    }
}

async fn build_sitemap_service(settings: &config::Settings) -> Result<SitemapService, AppError> {
    let catalog = FileCatalog::load(&settings.catalog.path).await?;
    let routes = Arc::new(RouteTable::from_settings(&settings.store));
    Ok(SitemapService::new(
        catalog.sitemap_repos(),
        routes,
        SitemapOptions::from(settings),
    ))
}

async fn run_generate(sitemap: SitemapService, args: config::GenerateArgs) -> Result<(), AppError> {
    let written = match args.output.as_ref() {
        Some(path) => {
            let mut buffer = Vec::new();
            let written = sitemap.write(args.page, &mut buffer).await?;
            if written {
                tokio::fs::write(path, &buffer)
                    .await
                    .map_err(InfraError::from)?;
                info!(
                    target: "storefront::generate",
                    path = %path.display(),
                    bytes = buffer.len(),
                    "Sitemap written"
                );
            }
            written
        }
        None => sitemap.write(args.page, std::io::stdout()).await?,
    };

    if !written {
        warn!(
            target: "storefront::generate",
            page = args.page,
            "Nothing to write: the sitemap is empty or the page does not exist"
        );
    }

    Ok(())
}

async fn serve_http(settings: &config::Settings, sitemap: SitemapService) -> Result<(), AppError> {
    let router = http::build_router(HttpState {
        sitemap: Arc::new(sitemap),
    });

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    info!(addr = %settings.server.addr, "Listening");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
