use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::db::{Database, NewsItem};
use crate::nav::{resolve_current_page, NavContext};

pub struct AppState {
    pub db: Arc<Database>,
}

// Template structs
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub nav: NavContext,
    pub latest: Option<NewsItem>,
}

#[derive(Template)]
#[template(path = "quotes.html")]
pub struct QuotesTemplate {
    pub nav: NavContext,
}

#[derive(Template)]
#[template(path = "news.html")]
pub struct NewsTemplate {
    pub nav: NavContext,
    pub items: Vec<NewsItem>,
}

#[derive(Template)]
#[template(path = "grid_failover.html")]
pub struct GridFailoverTemplate {
    pub nav: NavContext,
}

// Wrapper for HTML responses
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}

// Custom error type: any database failure aborts the render with an inline
// diagnostic instead of a partial page.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: {}", self.0),
        )
            .into_response()
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

// Route handlers
pub async fn index(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let latest = state.db.latest_news().await?;

    Ok(HtmlTemplate(IndexTemplate {
        nav: NavContext::for_page("Home"),
        latest,
    }))
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

pub async fn quotes(Query(query): Query<PageQuery>) -> impl IntoResponse {
    let current = resolve_current_page(query.page.as_deref());

    HtmlTemplate(QuotesTemplate {
        nav: NavContext::for_page(current),
    })
}

pub async fn news(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let items = state.db.all_news().await?;

    Ok(HtmlTemplate(NewsTemplate {
        nav: NavContext::for_page("News"),
        items,
    }))
}

pub async fn grid_failover() -> impl IntoResponse {
    HtmlTemplate(GridFailoverTemplate {
        nav: NavContext::for_page("Samples"),
    })
}

pub async fn health() -> impl IntoResponse {
    Html("OK")
}
