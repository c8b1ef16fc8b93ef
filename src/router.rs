use axum::{Router, routing::get};
use std::sync::Arc;

use crate::db::PostsStorage;
use crate::handlers::posts;

#[derive(Clone)]
pub struct BlogState {
    pub storage: PostsStorage,
    pub site_title: Arc<str>,
}

impl BlogState {
    pub fn new(storage: PostsStorage, site_title: impl Into<Arc<str>>) -> Self {
        Self {
            storage,
            site_title: site_title.into(),
        }
    }
}

pub fn blog_router(state: BlogState) -> Router {
    Router::new()
        .route("/", get(posts::home))
        .route("/post/{id}", get(posts::read_post))
        .route(
            "/create_post",
            get(posts::create_post_form).post(posts::create_post),
        )
        .route(
            "/edit_post/{id}",
            get(posts::edit_post_form).post(posts::edit_post),
        )
        .route(
            "/delete_post/{id}",
            get(posts::delete_post_confirmation).post(posts::delete_post),
        )
        .with_state(state)
}
