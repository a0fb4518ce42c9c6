//! Domain layer - Business logic and domain models

pub mod content_id;
pub mod expression;
pub mod index;

pub use content_id::{identify, ContentKey};
pub use expression::{TagExpression, TagSet};
pub use index::{TagIndex, TagStore};
