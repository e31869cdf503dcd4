//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blog_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub created_at: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Conversion from a new Domain Post to SeaORM ActiveModel. The id is left to
/// the autoincrement key.
impl From<&NewPost> for ActiveModel {
    fn from(post: &NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            created_at: Set(Some(post.created_at.clone())),
            updated_at: Set(Some(post.created_at.clone())),
        }
    }
}
