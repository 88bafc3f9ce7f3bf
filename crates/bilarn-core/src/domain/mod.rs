//! Domain entities - the core business objects.

mod post;

pub use post::{BlogPost, BlogPostChanges, NewBlogPost, parse_post_id};
