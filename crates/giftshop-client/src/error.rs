use thiserror::Error;

/// Errors returned by [`crate::ShopClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// The body was not JSON, even after unwrapping a double-encoded string.
    #[error("invalid response for {context}: {source}")]
    InvalidResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body was valid JSON but not the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ClientError {
    /// Notification text for a front end. `action` names what failed, e.g.
    /// `"fetch products"`.
    #[must_use]
    pub fn user_message(&self, action: &str) -> String {
        match self {
            ClientError::InvalidResponse { .. } => {
                format!("Response to {action} was not valid JSON.")
            }
            ClientError::UnexpectedStatus { body, .. } if !body.trim().is_empty() => {
                format!("Unable to {action}: {}", body.trim())
            }
            ClientError::Http(_) => format!("Unable to {action}: the server could not be reached."),
            _ => format!("Unable to {action}."),
        }
    }
}

/// Reasons a checkout is refused or fails.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("guest email and phone are required")]
    MissingGuestContact,

    #[error("an order is already being placed")]
    AlreadyPlacing,

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CheckoutError {
    /// Notification text for a front end.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::EmptyCart => "Your cart is empty.".to_string(),
            CheckoutError::MissingGuestContact => {
                "Guest email and phone are required.".to_string()
            }
            CheckoutError::AlreadyPlacing => "Your order is already being placed.".to_string(),
            CheckoutError::Client(ClientError::InvalidResponse { .. }) => {
                "Order response was not valid JSON.".to_string()
            }
            CheckoutError::Client(_) => "Unable to place order.".to_string(),
        }
    }

    /// `true` when the refusal happened before any request was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, CheckoutError::Client(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_response() -> ClientError {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        ClientError::InvalidResponse {
            context: "GET /products".to_owned(),
            source,
        }
    }

    #[test]
    fn invalid_response_has_distinct_message() {
        assert_eq!(
            invalid_response().user_message("fetch products"),
            "Response to fetch products was not valid JSON."
        );
    }

    #[test]
    fn status_error_surfaces_body_text() {
        let err = ClientError::UnexpectedStatus {
            status: 409,
            url: "http://x/product".to_owned(),
            body: "name already taken\n".to_owned(),
        };
        assert_eq!(
            err.user_message("save product"),
            "Unable to save product: name already taken"
        );
    }

    #[test]
    fn status_error_without_body_is_generic() {
        let err = ClientError::UnexpectedStatus {
            status: 500,
            url: "http://x/product".to_owned(),
            body: String::new(),
        };
        assert_eq!(err.user_message("delete product"), "Unable to delete product.");
    }

    #[test]
    fn checkout_validation_errors_are_flagged() {
        assert!(CheckoutError::EmptyCart.is_validation());
        assert!(CheckoutError::MissingGuestContact.is_validation());
        assert!(CheckoutError::AlreadyPlacing.is_validation());
        assert!(!CheckoutError::Client(invalid_response()).is_validation());
    }

    #[test]
    fn checkout_messages() {
        assert_eq!(
            CheckoutError::MissingGuestContact.user_message(),
            "Guest email and phone are required."
        );
        assert_eq!(
            CheckoutError::Client(ClientError::UnexpectedStatus {
                status: 500,
                url: String::new(),
                body: String::new(),
            })
            .user_message(),
            "Unable to place order."
        );
    }
}
