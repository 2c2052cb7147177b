//! Request, response and configuration types

mod environment;
mod event;
mod object_key;

pub use environment::Environment;
pub use event::{InvocationEvent, UploadResponse};
pub use object_key::ObjectKey;
