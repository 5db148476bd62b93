use reqwest::StatusCode;
use serde::Serialize;

/// Classification of a failed weather query.
///
/// HTTP kinds come from the response status, transport kinds from the
/// category of the client error. Each kind owns a fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    OtherHttpError { status: u16 },
    ConnectionFailure,
    Timeout,
    TooManyRedirects,
    OtherTransportError,
}

/// Exact-match status table. Anything absent falls back to `OtherHttpError`.
const STATUS_TABLE: &[(u16, ErrorKind)] = &[
    (400, ErrorKind::BadRequest),
    (401, ErrorKind::Unauthorized),
    (403, ErrorKind::Forbidden),
    (404, ErrorKind::NotFound),
    (500, ErrorKind::ServerError),
    (502, ErrorKind::BadGateway),
    (503, ErrorKind::ServiceUnavailable),
    (504, ErrorKind::GatewayTimeout),
];

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind)
            .unwrap_or(ErrorKind::OtherHttpError { status })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::ServerError => "server_error",
            ErrorKind::BadGateway => "bad_gateway",
            ErrorKind::ServiceUnavailable => "service_unavailable",
            ErrorKind::GatewayTimeout => "gateway_timeout",
            ErrorKind::OtherHttpError { .. } => "http_error",
            ErrorKind::ConnectionFailure => "connection_failure",
            ErrorKind::Timeout => "timeout",
            ErrorKind::TooManyRedirects => "too_many_redirects",
            ErrorKind::OtherTransportError => "transport_error",
        }
    }

    /// The message shown to the user in place of the temperature.
    pub fn message(&self) -> String {
        match self {
            ErrorKind::BadRequest => "Bad Request:\nPlease check input and retry".into(),
            ErrorKind::Unauthorized => "Unauthorized Request:\nInvalid API Key".into(),
            ErrorKind::Forbidden => {
                "Forbidden Request:\nProvided API Key does not have access to requested content"
                    .into()
            }
            ErrorKind::NotFound => "Request Not Found:\nCity not found".into(),
            ErrorKind::ServerError => {
                "Internal Server Error:\nPlease try again at another time".into()
            }
            ErrorKind::BadGateway => "Bad Gateway:\nInvalid response from the server".into(),
            ErrorKind::ServiceUnavailable => "Service Unavailable:\nServer is unable to process \
                 your request - please try again at another time"
                .into(),
            ErrorKind::GatewayTimeout => "Gateway Timeout:\nNo response from the server".into(),
            ErrorKind::OtherHttpError { status } => {
                format!("HTTP Error Occurred:\n{}", status_text(*status))
            }
            ErrorKind::ConnectionFailure => {
                "Connection Error:\nPlease check your internet connection and try again".into()
            }
            ErrorKind::Timeout => "Timeout Error:\nThe request timed out - please try again".into(),
            ErrorKind::TooManyRedirects => {
                "Too Many Redirects:\nEnsure the URL is correct and try again".into()
            }
            ErrorKind::OtherTransportError => {
                "Request Error:\nThe request could not be completed".into()
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::OtherHttpError { status } => write!(f, "{}({status})", self.as_str()),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// "418 Client Error: I'm a teapot"; the category and reason are dropped when unknown.
fn status_text(status: u16) -> String {
    let reason = StatusCode::from_u16(status).ok().and_then(|code| code.canonical_reason());
    let category = match status {
        400..=499 => Some("Client Error"),
        500..=599 => Some("Server Error"),
        _ => None,
    };

    match (category, reason) {
        (Some(category), Some(reason)) => format!("{status} {category}: {reason}"),
        (Some(category), None) => format!("{status} {category}"),
        (None, Some(reason)) => format!("{status} {reason}"),
        (None, None) => status.to_string(),
    }
}
