//! Application layer - Use cases and orchestration

pub mod apply_tags;
pub mod init;
pub mod list_tags;
pub mod query_files;

pub use apply_tags::ApplyTagsService;
pub use list_tags::ListTagsService;
pub use query_files::QueryFilesService;
