use crate::models::ApiResponse;

pub const HOBBY_SEPARATOR: &str = ", ";

pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

pub fn join_hobbies(hobbies: &[String]) -> String {
    hobbies.join(HOBBY_SEPARATOR)
}

/// Reverses by `char`, so multi-byte characters survive intact.
pub fn reverse_chars(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn format_hobbies(response: &ApiResponse) -> String {
    let joined = join_hobbies(&response.hobbies);

    match response.challenge_token.as_deref() {
        Some(token) => format!("{}:{}", reverse_chars(&joined), reverse_chars(token)),
        None => joined,
    }
}
