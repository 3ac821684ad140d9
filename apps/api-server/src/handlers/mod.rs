//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod profile;
mod users;

use actix_web::web;

/// Treat empty and whitespace-only strings as absent fields.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Registration
            .route("/users", web::post().to(users::register))
            // Session
            .service(
                web::scope("/auth")
                    .route("", web::post().to(auth::login))
                    .route("", web::get().to(auth::current_user)),
            )
            // Profiles
            .service(
                web::scope("/profile")
                    .route("/me", web::get().to(profile::me))
                    .route("", web::post().to(profile::upsert))
                    .route("", web::get().to(profile::all))
                    .route("", web::delete().to(profile::delete_account))
                    .route("/user/{user_id}", web::get().to(profile::by_user))
                    .route("/experience", web::put().to(profile::add_experience))
                    .route(
                        "/experience/{exp_id}",
                        web::delete().to(profile::remove_experience),
                    )
                    .route("/education", web::put().to(profile::add_education))
                    .route(
                        "/education/{edu_id}",
                        web::delete().to(profile::remove_education),
                    )
                    .route("/github/{username}", web::get().to(profile::github_repos)),
            )
            // Posts
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("", web::get().to(posts::all))
                    .route("/{post_id}", web::get().to(posts::by_id))
                    .route("/{post_id}", web::delete().to(posts::remove)),
            ),
    );
}
