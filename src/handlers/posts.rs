use axum::{
    extract::State,
    response::{Html, Redirect},
};
use tracing::info;

use crate::db::Post;
use crate::middleware::{PostId, ValidPostForm};
use crate::pages::Page;
use crate::{BlogError, router::BlogState};

async fn fetch(state: &BlogState, id: i64) -> Result<Post, BlogError> {
    state
        .storage
        .get_post(id)
        .await?
        .ok_or(BlogError::PostNotFound)
}

fn render(state: &BlogState, page: Page<'_>) -> Html<String> {
    tracing::debug!(template = page.template_name(), "rendering page");
    page.render(&state.site_title)
}

/// GET / -> listing of every post.
pub async fn home(State(state): State<BlogState>) -> Result<Html<String>, BlogError> {
    let posts = state.storage.list_posts().await?;
    Ok(render(&state, Page::Index(&posts)))
}

/// GET /post/{id}
pub async fn read_post(
    State(state): State<BlogState>,
    PostId(id): PostId,
) -> Result<Html<String>, BlogError> {
    let post = fetch(&state, id).await?;
    Ok(render(&state, Page::Post(&post)))
}

/// GET /create_post
pub async fn create_post_form(State(state): State<BlogState>) -> Html<String> {
    render(&state, Page::CreatePost)
}

/// POST /create_post -> 303 to the listing.
pub async fn create_post(
    State(state): State<BlogState>,
    ValidPostForm(form): ValidPostForm,
) -> Result<Redirect, BlogError> {
    let post = state
        .storage
        .create_post(&form.title, &form.content)
        .await?;
    info!(id = post.id, "post created");
    Ok(Redirect::to("/"))
}

/// GET /edit_post/{id}
pub async fn edit_post_form(
    State(state): State<BlogState>,
    PostId(id): PostId,
) -> Result<Html<String>, BlogError> {
    let post = fetch(&state, id).await?;
    Ok(render(&state, Page::EditPost(&post)))
}

/// POST /edit_post/{id}
pub async fn edit_post(
    State(state): State<BlogState>,
    PostId(id): PostId,
    ValidPostForm(form): ValidPostForm,
) -> Result<Redirect, BlogError> {
    if !state
        .storage
        .update_post(id, &form.title, &form.content)
        .await?
    {
        return Err(BlogError::PostNotFound);
    }
    info!(id, "post updated");
    Ok(Redirect::to("/"))
}

/// GET /delete_post/{id} -> confirmation page.
pub async fn delete_post_confirmation(
    State(state): State<BlogState>,
    PostId(id): PostId,
) -> Result<Html<String>, BlogError> {
    let post = fetch(&state, id).await?;
    Ok(render(&state, Page::ConfirmDelete(&post)))
}

/// POST /delete_post/{id}
pub async fn delete_post(
    State(state): State<BlogState>,
    PostId(id): PostId,
) -> Result<Redirect, BlogError> {
    if !state.storage.delete_post(id).await? {
        return Err(BlogError::PostNotFound);
    }
    info!(id, "post deleted");
    Ok(Redirect::to("/"))
}
