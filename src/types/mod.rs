//! Wire types: the response envelope and the few API objects the client needs itself.

pub mod file;
pub mod response;
pub mod user;

pub use file::File;
pub use response::{ApiResponse, ResponseEnvelope, ResponseParameters};
pub use user::User;
