//! Lambda event handlers

mod upload;

pub use upload::upload_photo;
