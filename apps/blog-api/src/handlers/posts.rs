//! Post CRUD handlers. Each one issues exactly one store call.

use actix_web::{HttpResponse, web};

use blog_core::DomainError;
use blog_core::domain::{NewPost, Post, PostChanges};
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest, UpdatedPostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: i64) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost::new(req.title, req.content)?;

    let post = state.posts.create(new_post).await?;
    tracing::info!(post_id = post.id, "Post created");

    Ok(HttpResponse::Created().json(post_response(post)))
}

/// PUT /posts/{id}
///
/// Title and content are written as received, without the checks applied on
/// creation.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let changes = PostChanges::new(req.title, req.content);

    if !state.posts.update(id, &changes).await? {
        return Err(not_found(id));
    }
    tracing::info!(post_id = id, "Post updated");

    Ok(HttpResponse::Ok().json(UpdatedPostResponse {
        id,
        title: changes.title,
        content: changes.content,
        updated_at: changes.updated_at,
    }))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !state.posts.delete(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
