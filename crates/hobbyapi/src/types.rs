/// Where to fetch the challenge from and how to present ourselves.
///
/// Kept as a plain value so callers (and tests) can point the fetch at any
/// endpoint without touching process-wide state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeClient {
    pub(crate) endpoint: String,
    pub(crate) user_agent: String,
}

impl ChallengeClient {
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
