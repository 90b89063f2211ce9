use hobbyapi::{fetch_challenge, format_hobbies, ApiError, ChallengeClient};
use tracing::info;

use crate::constants::{BROWSER_USER_AGENT, CHALLENGE_ENDPOINT};

pub fn default_client() -> ChallengeClient {
    ChallengeClient::new(CHALLENGE_ENDPOINT, BROWSER_USER_AGENT)
}

pub async fn fetch_hobbies(client: &ChallengeClient) -> Result<String, ApiError> {
    let response = fetch_challenge(client).await?;
    let line = format_hobbies(&response);
    info!(chars = line.chars().count(), "hobby line ready");
    Ok(line)
}

/// Turns the outcome into the single line we print: the result or the
/// error description, never both.
pub fn render_outcome(outcome: Result<String, ApiError>) -> String {
    match outcome {
        Ok(line) => line,
        Err(err) => {
            info!(kind = err.kind(), "challenge fetch failed: {err}");
            err.to_string()
        }
    }
}
