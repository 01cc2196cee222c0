use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    application::{repos::RepoError, sitemap::SitemapError},
    config::LoadError,
    domain::error::DomainError,
    infra::error::InfraError,
};

#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub status: StatusCode,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, status: StatusCode, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self {
            source,
            status,
            messages,
        }
    }

    pub fn from_message(
        source: &'static str,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            status,
            messages: vec![message.into()],
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    public_message: &'static str,
    report: ErrorReport,
}

impl HttpError {
    pub fn new(
        source: &'static str,
        status: StatusCode,
        public_message: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        let report = ErrorReport::from_message(source, status, detail);
        Self {
            status,
            public_message,
            report,
        }
    }

    pub fn from_error(
        source: &'static str,
        status: StatusCode,
        public_message: &'static str,
        error: &dyn StdError,
    ) -> Self {
        let report = ErrorReport::from_error(source, status, error);
        Self {
            status,
            public_message,
            report,
        }
    }

    pub fn not_found(source: &'static str, detail: impl Into<String>) -> Self {
        Self::new(source, StatusCode::NOT_FOUND, "Not found", detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.public_message).into_response();
        self.report.attach(&mut response);
        response
    }
}

impl From<SitemapError> for HttpError {
    fn from(error: SitemapError) -> Self {
        const SOURCE: &str = "infra::http::sitemap_error_to_http_error";
        match error {
            SitemapError::Disabled => HttpError::not_found(SOURCE, "sitemap is disabled"),
            SitemapError::Repo(RepoError::NotFound) => {
                HttpError::not_found(SOURCE, "catalog data not found")
            }
            SitemapError::Repo(err) => HttpError::from_error(
                SOURCE,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate sitemap",
                &err,
            ),
            SitemapError::Route(err) => HttpError::from_error(
                SOURCE,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate sitemap",
                &err,
            ),
            SitemapError::TooManyPages { pages } => HttpError::new(
                SOURCE,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate sitemap",
                format!("{pages} sitemap pages cannot be numbered"),
            ),
            SitemapError::Io(err) => HttpError::from_error(
                SOURCE,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate sitemap",
                &err,
            ),
        }
    }
}

/// Failures surfaced by the binary's commands.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Sitemap(#[from] SitemapError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::routing::RouteError;
    use crate::domain::types::RouteName;

    #[test]
    fn report_collects_source_chain() {
        let error = SitemapError::Repo(RepoError::Persistence("disk full".to_string()));
        let report = ErrorReport::from_error("test", StatusCode::INTERNAL_SERVER_ERROR, &error);

        assert_eq!(report.messages.len(), 2);
        assert_eq!(report.messages[1], "persistence error: disk full");
    }

    #[test]
    fn sitemap_errors_map_to_statuses() {
        assert_eq!(
            HttpError::from(SitemapError::Disabled).status(),
            StatusCode::NOT_FOUND
        );
        let route = SitemapError::Route(RouteError::MissingParameter {
            route: RouteName::Product,
            parameter: "se_name",
        });
        assert_eq!(
            HttpError::from(route).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_response_carries_report() {
        let response = HttpError::from(SitemapError::Disabled).into_response();
        let report = response
            .extensions()
            .get::<ErrorReport>()
            .expect("report attached");

        assert_eq!(report.status, StatusCode::NOT_FOUND);
        assert_eq!(report.messages, vec!["sitemap is disabled".to_string()]);
    }
}
