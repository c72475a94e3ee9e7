//! Chat and API error types.

/// Errors from the chat endpoint. These never reach the annotation pipeline.
#[derive(Debug)]
pub enum ChatError {
    ApiAuth(String),
    ApiMessage(String),
    /// The API answered without any message content.
    EmptyResponse,
    /// The request was cancelled by the user.
    Cancelled,
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::ApiAuth(msg) => write!(f, "{}", msg),
            ChatError::ApiMessage(msg) => write!(f, "API error: {}", msg),
            ChatError::EmptyResponse => write!(f, "The assistant returned an empty response"),
            ChatError::Cancelled => write!(f, "Request cancelled"),
            ChatError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::Other(e) => Some(e.as_ref()),
            ChatError::ApiAuth(_)
            | ChatError::ApiMessage(_)
            | ChatError::EmptyResponse
            | ChatError::Cancelled => None,
        }
    }
}

/// 401 status as its own token (HTTP status line or JSON code), or Azure's key rejection text.
fn is_auth_failure(s: &str) -> bool {
    s.contains("(401")
        || s.contains("401 Unauthorized")
        || s.contains("\"code\":\"401\"")
        || s.contains("invalid subscription key")
}

/// Map async-openai or API errors into ChatError.
pub fn map_api_error<E>(e: E) -> ChatError
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let s = e.to_string();
    if is_auth_failure(&s) {
        return ChatError::ApiAuth(
            "API error (401): access denied. Check AZURE_OPENAI_API_KEY in .env or run `wathiqa config set --api-key`.".to_string(),
        );
    }
    if s.contains("\"error\"")
        && let Some((_, rest)) = s.split_once("\"message\":\"")
        && let Some((msg, _)) = rest.split_once('"')
    {
        return ChatError::ApiMessage(msg.to_string());
    }
    ChatError::Other(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_api_error_401() {
        let e = std::io::Error::other("HTTP status client error (401 Unauthorized)");
        let err = map_api_error(e);
        match &err {
            ChatError::ApiAuth(msg) => {
                assert!(msg.contains("AZURE_OPENAI_API_KEY"));
            }
            _ => panic!("expected ApiAuth, got {:?}", err),
        }
    }

    #[test]
    fn map_api_error_invalid_subscription_key() {
        let e = std::io::Error::other(
            "Access denied due to invalid subscription key or wrong API endpoint.",
        );
        assert!(matches!(map_api_error(e), ChatError::ApiAuth(_)));
    }

    #[test]
    fn map_api_error_json_message() {
        let e = std::io::Error::other(
            r#"{"error":{"code":"429","message":"Rate limit is exceeded"}}"#,
        );
        let err = map_api_error(e);
        match &err {
            ChatError::ApiMessage(msg) => assert_eq!(msg, "Rate limit is exceeded"),
            _ => panic!("expected ApiMessage, got {:?}", err),
        }
    }

    #[test]
    fn map_api_error_generic() {
        let e = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = map_api_error(e);
        match &err {
            ChatError::Other(_) => assert_eq!(err.to_string(), "connection refused"),
            _ => panic!("expected Other, got {:?}", err),
        }
    }

    #[test]
    fn map_api_error_401_json_code() {
        let e = std::io::Error::other(
            r#"{"error":{"code":"401","message":"Access denied due to invalid credentials"}}"#,
        );
        assert!(matches!(map_api_error(e), ChatError::ApiAuth(_)));
    }

    #[test]
    fn map_api_error_digits_401_inside_message_are_not_auth() {
        let e = std::io::Error::other(
            r#"{"error":{"code":"context_length_exceeded","message":"This model's maximum context length is 4096 tokens. However, your messages resulted in 4012 tokens."}}"#,
        );
        let err = map_api_error(e);
        match &err {
            ChatError::ApiMessage(msg) => assert!(msg.contains("4012 tokens")),
            _ => panic!("expected ApiMessage, got {:?}", err),
        }
    }

    #[test]
    fn other_error_is_first_link_of_source_chain() {
        use std::error::Error;
        let err = map_api_error(std::io::Error::other("connection reset"));
        let source = err.source().expect("wrapped error is the source");
        assert_eq!(source.to_string(), "connection reset");
    }

    #[test]
    fn display_messages() {
        assert_eq!(ChatError::Cancelled.to_string(), "Request cancelled");
        assert_eq!(
            ChatError::ApiMessage("quota".into()).to_string(),
            "API error: quota"
        );
    }
}
