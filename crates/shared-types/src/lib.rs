pub mod answers;
pub mod builder;
pub mod config;
pub mod error;
pub mod form;
pub mod guard;
pub mod inflight;
pub mod session;
pub mod steps;
pub mod submission;
pub mod upload;
pub mod user;

pub use answers::*;
pub use builder::*;
pub use config::*;
pub use error::*;
pub use form::*;
pub use guard::*;
pub use inflight::*;
pub use session::*;
pub use steps::*;
pub use submission::*;
pub use upload::*;
pub use user::*;
