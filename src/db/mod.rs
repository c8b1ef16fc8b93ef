//! Database module: the post record and its SQLite-backed accessor.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and form input
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: `PostsStorage`, the only code that talks to the store

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Post, PostForm};
pub use sqlite::{PostsStorage, connect};
