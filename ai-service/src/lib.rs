pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "UTH-ConfMS AI Service"),
    paths(
        handlers::health::root_status,
        handlers::text::summarize,
        handlers::text::spellcheck,
    ),
    components(
        schemas(
            dtos::TextInput,
            dtos::SummaryOutput,
            dtos::SpellcheckOutput,
            dtos::Correction,
            dtos::StatusResponse,
            service_core::error::ErrorResponse,
        )
    ),
    tags(
        (name = "Text", description = "Placeholder text analysis"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;
