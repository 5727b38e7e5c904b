pub mod error;
pub mod handlers;
pub mod lines;

pub use error::ApiError;
pub use handlers::*;
pub use lines::MovieLines;
