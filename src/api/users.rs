use actix_web::{web, HttpResponse, ResponseError};

use crate::models::{MessageResponse, User};
use crate::services::UserService;
use crate::utils::deadline::Deadline;

#[utoipa::path(
    post,
    path = "/v1/users/create",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = MessageResponse),
        (status = 500, description = "Database error", body = MessageResponse),
        (status = 504, description = "Request deadline exceeded", body = MessageResponse)
    )
)]
pub async fn create_user(
    service: web::Data<dyn UserService>,
    deadline: Deadline,
    body: web::Json<User>,
) -> HttpResponse {
    let user = body.into_inner();
    log::info!("👤 POST /users/create - {}", user.name);

    match service.create_user(&user, &deadline).await {
        Ok(()) => {
            log::info!("✅ User '{}' created", user.name);
            HttpResponse::Created().json(MessageResponse::new("User added successfully"))
        }
        Err(e) => {
            log::error!("❌ Error creating user '{}': {}", user.name, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/users/getUser/{name}",
    tag = "Users",
    params(("name" = String, Path, description = "User name")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with this name", body = MessageResponse),
        (status = 500, description = "Database error", body = MessageResponse)
    )
)]
pub async fn get_user(
    service: web::Data<dyn UserService>,
    deadline: Deadline,
    path: web::Path<String>,
) -> HttpResponse {
    let name = path.into_inner();
    log::info!("🔍 GET /users/getUser/{}", name);

    match service.get_user(&name, &deadline).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            log::error!("❌ Error fetching user '{}': {}", name, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/users/getAll",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = Vec<User>),
        (status = 500, description = "Database error", body = MessageResponse)
    )
)]
pub async fn get_all(service: web::Data<dyn UserService>, deadline: Deadline) -> HttpResponse {
    log::info!("📋 GET /users/getAll");

    match service.get_all(&deadline).await {
        Ok(users) => {
            log::info!("✅ Retrieved {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.error_response()
        }
    }
}

/// O nome do path localiza o registro; o body traz os novos valores
/// (inclusive `name`, permitindo renomear).
#[utoipa::path(
    put,
    path = "/v1/users/update/{name}",
    tag = "Users",
    params(("name" = String, Path, description = "Name of the user to replace")),
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = MessageResponse),
        (status = 404, description = "No user with this name", body = MessageResponse),
        (status = 500, description = "Database error", body = MessageResponse)
    )
)]
pub async fn update_user(
    service: web::Data<dyn UserService>,
    deadline: Deadline,
    path: web::Path<String>,
    body: web::Json<User>,
) -> HttpResponse {
    let name = path.into_inner();
    let user = body.into_inner();
    log::info!("✏️  PUT /users/update/{}", name);

    match service.update_user(&name, &user, &deadline).await {
        Ok(()) => {
            log::info!("✅ User '{}' updated", name);
            HttpResponse::Ok().json(MessageResponse::new("User updated successfully"))
        }
        Err(e) => {
            log::error!("❌ Error updating user '{}': {}", name, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/v1/users/delete/{name}",
    tag = "Users",
    params(("name" = String, Path, description = "User name")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "No user with this name", body = MessageResponse),
        (status = 500, description = "Database error", body = MessageResponse)
    )
)]
pub async fn delete_user(
    service: web::Data<dyn UserService>,
    deadline: Deadline,
    path: web::Path<String>,
) -> HttpResponse {
    let name = path.into_inner();
    log::info!("🗑️  DELETE /users/delete/{}", name);

    match service.delete_user(&name, &deadline).await {
        Ok(()) => {
            log::info!("✅ User '{}' deleted", name);
            HttpResponse::Ok().json(MessageResponse::new("User deleted successfully"))
        }
        Err(e) => {
            log::error!("❌ Error deleting user '{}': {}", name, e);
            e.error_response()
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("/create", web::post().to(create_user))
            .route("/getUser/{name}", web::get().to(get_user))
            .route("/getAll", web::get().to(get_all))
            .route("/update/{name}", web::put().to(update_user))
            .route("/delete/{name}", web::delete().to(delete_user)),
    );
}
