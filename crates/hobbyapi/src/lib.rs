pub mod api;
pub mod error;
pub mod models;
pub mod types;
pub mod utils;

pub use api::{fetch_challenge, parse_response};
pub use error::ApiError;
pub use models::ApiResponse;
pub use types::ChallengeClient;
pub use utils::{format_hobbies, join_hobbies, reverse_chars};
