pub const CHALLENGE_ENDPOINT: &str = "https://coderbyte.com/api/challenges/json/rest-get-simple";
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
pub const DEFAULT_LOG_FILTER: &str = "warn";
