pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;

pub use error::BlogError;
pub use router::{BlogState, blog_router};
