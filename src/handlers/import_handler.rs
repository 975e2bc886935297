use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};

use crate::config::AppState;
use crate::models::auth_model::CurrentUser;
use crate::services::import_service::{ImportError, ImportService};
use crate::services::source_service::SourceService;
use crate::utils::api_response::ResponseBuilder;

/// One-shot migration from the legacy document store. Fetches the full
/// source snapshot first, so a source failure aborts before any target
/// write; the import itself is all-or-nothing.
pub async fn run_import_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> impl IntoResponse {
    tracing::info!(user = %user.username, "import triggered");

    let source = SourceService::new(&state.config);
    let snapshot = match source.fetch_snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!(error = %e, "source store unreachable");
            return ResponseBuilder::error::<()>(
                StatusCode::BAD_GATEWAY,
                "SOURCE_UNAVAILABLE",
                &format!("Failed to read source store: {}", e),
            )
            .into_response();
        }
    };

    match ImportService::run(&state.db, snapshot).await {
        Ok(summary) => {
            tracing::info!(
                authors = summary.authors,
                tags = summary.tags,
                quotes = summary.quotes,
                "import finished"
            );
            ResponseBuilder::success("IMPORT_COMPLETE", "Migration finished", summary)
                .into_response()
        }
        Err(e @ ImportError::UnknownAuthor { .. }) => ResponseBuilder::error::<()>(
            StatusCode::UNPROCESSABLE_ENTITY,
            "SOURCE_INCONSISTENT",
            &e.to_string(),
        )
        .into_response(),
        Err(ImportError::Source(e)) => ResponseBuilder::error::<()>(
            StatusCode::BAD_GATEWAY,
            "SOURCE_UNAVAILABLE",
            &e.to_string(),
        )
        .into_response(),
        Err(ImportError::Database(e)) => ResponseBuilder::error::<()>(
            StatusCode::INTERNAL_SERVER_ERROR,
            "DB_ERR",
            &format!("Import rolled back: {}", e),
        )
        .into_response(),
    }
}
