//! One-shot notices carried across a redirect in a signed cookie.
//!
//! The cookie holds a JSON list of messages, base64url-encoded so quotes and
//! separators in store error text survive the header round trip.

use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::config::FLASH_COOKIE_NAME;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub category: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Error, message)
    }

    fn new(category: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Queue a message for the next rendered page.
pub fn push(jar: SignedCookieJar, flash: Flash) -> AppResult<SignedCookieJar> {
    let mut queued = pending(&jar);
    queued.push(flash);

    let cookie = Cookie::build((FLASH_COOKIE_NAME, encode(&queued)?))
        .path("/")
        .http_only(true);
    Ok(jar.add(cookie))
}

/// Read and clear every queued message.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<Flash>) {
    if jar.get(FLASH_COOKIE_NAME).is_none() {
        return (jar, Vec::new());
    }

    let messages = pending(&jar);
    let jar = jar.remove(Cookie::build(FLASH_COOKIE_NAME).path("/"));
    (jar, messages)
}

fn pending(jar: &SignedCookieJar) -> Vec<Flash> {
    jar.get(FLASH_COOKIE_NAME)
        .and_then(|cookie| decode(cookie.value()))
        .unwrap_or_default()
}

fn encode(messages: &[Flash]) -> AppResult<String> {
    let json = serde_json::to_vec(messages)
        .map_err(|e| AppError::internal(format!("Flash encoding failed: {}", e)))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode(value: &str) -> Option<Vec<Flash>> {
    let json = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&json).ok()
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::cookie::Key;

    use super::*;

    fn jar() -> SignedCookieJar {
        SignedCookieJar::new(Key::from(&[7u8; 64]))
    }

    #[test]
    fn test_take_on_empty_jar() {
        let (_, messages) = take(jar());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_push_then_take_in_order() {
        let jar = push(jar(), Flash::warning("Email is required")).unwrap();
        let jar = push(jar, Flash::error("Error adding employee: \"dup\"; key")).unwrap();

        let (jar, messages) = take(jar);
        assert_eq!(
            messages,
            vec![
                Flash::warning("Email is required"),
                Flash::error("Error adding employee: \"dup\"; key"),
            ]
        );
        assert!(jar.get(FLASH_COOKIE_NAME).is_none());
    }

    #[test]
    fn test_encoded_value_is_cookie_safe() {
        let value = encode(&[Flash::error("a \"quoted\", value; here")]).unwrap();
        assert!(value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_garbage_cookie_is_ignored() {
        assert_eq!(decode("not base64 !"), None);
        assert_eq!(decode(&URL_SAFE_NO_PAD.encode("{}")), None);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Flash::success("ok")).unwrap();
        assert_eq!(json, r#"{"category":"success","message":"ok"}"#);
    }
}
