//! Domain entities - the core business objects.

mod post;
pub mod timestamp;

pub use post::{NewPost, Post, PostChanges};
