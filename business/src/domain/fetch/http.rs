pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const APPLICATION_JSON: &str = "application/json";

/// Path the user is sent to when the session is no longer authorized.
pub const LOGIN_PATH: &str = "/login";

pub const STATUS_FORBIDDEN: u16 = 403;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(format!("Invalid http method: {}", s)),
        }
    }
}

/// A single outgoing call, independent of the HTTP library that sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub endpoint: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Looks a header up by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == STATUS_FORBIDDEN
    }
}

/// What became of a call once the session check ran.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The server answered; any status, including errors, lands here.
    Completed(HttpResponse),
    /// The session was rejected and the user is being sent to the login page.
    /// The operation did not complete and should be abandoned silently.
    Redirected,
}

impl FetchOutcome {
    pub fn is_redirected(&self) -> bool {
        matches!(self, FetchOutcome::Redirected)
    }

    pub fn into_response(self) -> Option<HttpResponse> {
        match self {
            FetchOutcome::Completed(response) => Some(response),
            FetchOutcome::Redirected => None,
        }
    }
}
