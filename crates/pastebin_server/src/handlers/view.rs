//! Minimal HTML page for share links.

use super::request_clock;
use crate::{models::paste::PasteView, service, AppError, AppState};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const PAGE_STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem}\
pre{background:#f4f4f4;padding:1rem;overflow:auto;white-space:pre-wrap;word-break:break-word}\
.meta{color:#666;font-size:.9rem}";

/// Render a paste as HTML, consuming one view.
///
/// Any not-found reason yields the same 404 page.
pub async fn view_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let clock = request_clock(&headers, state.config.test_mode);
    let result = match state.store.get().await {
        Ok(db) => service::read_and_consume(&db, &id, clock.as_ref()),
        Err(err) => Err(err),
    };

    match result {
        Ok(view) => render_paste_page(&id, &view).into_response(),
        Err(AppError::NotFound(_)) => (StatusCode::NOT_FOUND, render_not_found_page()).into_response(),
        Err(err) => {
            tracing::error!("Failed to render paste {}: {:?}", id, err);
            (StatusCode::INTERNAL_SERVER_ERROR, render_error_page()).into_response()
        }
    }
}

fn document(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(PAGE_STYLE)) }
            }
            body { (body) }
        }
    }
}

fn render_paste_page(id: &str, view: &PasteView) -> Markup {
    let title = format!("Paste {id}");
    let body = html! {
        h1 { "Paste: " (id) }
        pre { code { (view.content) } }
        p class="meta" { "Views: " (view.current_views) }
    };
    document(&title, body)
}

fn render_not_found_page() -> Markup {
    document(
        "Paste not found",
        html! {
            h1 { "Paste not found" }
            p { "This paste does not exist or has expired." }
        },
    )
}

fn render_error_page() -> Markup {
    document(
        "Something went wrong",
        html! {
            h1 { "Something went wrong" }
            p { "The paste could not be loaded." }
        },
    )
}
