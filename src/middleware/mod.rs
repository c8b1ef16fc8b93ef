pub mod post_form;
pub mod post_id;

pub use post_form::ValidPostForm;
pub use post_id::PostId;
