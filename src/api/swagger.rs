use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD Service API",
        version = "1.0.0",
        description = "CRUD over a single User entity stored in MongoDB, keyed by `name`.\n\nErrors are returned as `{\"message\": string}`."
    ),
    paths(
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::get_all,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::Address,
            crate::models::MessageResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, read, update and delete users by name."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;
