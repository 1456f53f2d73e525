use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::StatusCode;
use serde::Serialize;

/// What callers see in place of an unanticipated error's detail.
pub const GENERIC: &str = "An unexpected error occurred. Please try again later.";

/// Every way a request can fail.
///
/// Handlers return `Result<_, Fault>`; actix turns the error side into
/// a JSON [`Envelope`] through the [`ResponseError`] impl below, so no
/// route builds error responses of its own.
#[derive(Debug)]
pub enum Fault {
    InvalidRequest(String),
    NotFound(String),
    NotAllowed,
    Internal(anyhow::Error),
}

/// JSON error body: `{code, name, description}`.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub code: u16,
    pub name: &'static str,
    pub description: String,
}

impl Fault {
    pub fn name(&self) -> &'static str {
        self.status_code().canonical_reason().unwrap_or("Unknown")
    }
    /// Caller-facing description. Internal detail is never included.
    pub fn description(&self) -> String {
        match self {
            Self::InvalidRequest(description) => description.clone(),
            Self::NotFound(description) => description.clone(),
            Self::NotAllowed => "The method is not allowed for the requested URL.".into(),
            Self::Internal(_) => GENERIC.into(),
        }
    }
    pub fn envelope(&self) -> Envelope {
        Envelope {
            code: self.status_code().as_u16(),
            name: self.name(),
            description: self.description(),
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal(e) => write!(f, "{}: {:#}", self.name(), e),
            _ => write!(f, "{}: {}", self.name(), self.description()),
        }
    }
}

impl std::error::Error for Fault {}

impl ResponseError for Fault {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        if let Self::Internal(_) = self {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}

impl From<anyhow::Error> for Fault {
    fn from(e: anyhow::Error) -> Self {
        Self::Internal(e)
    }
}

impl From<tokio_postgres::Error> for Fault {
    fn from(e: tokio_postgres::Error) -> Self {
        Self::Internal(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_and_names() {
        let cases = [
            (Fault::InvalidRequest("x".into()), 400, "Bad Request"),
            (Fault::NotFound("x".into()), 404, "Not Found"),
            (Fault::NotAllowed, 405, "Method Not Allowed"),
            (Fault::Internal(anyhow::anyhow!("x")), 500, "Internal Server Error"),
        ];
        for (fault, code, name) in cases {
            let envelope = fault.envelope();
            assert!(envelope.code == code);
            assert!(envelope.name == name);
        }
    }

    #[test]
    fn internal_detail_is_hidden() {
        let fault = Fault::from(anyhow::anyhow!("relation \"sales\" does not exist"));
        let json = serde_json::to_string(&fault.envelope()).unwrap();
        assert!(!json.contains("sales"));
        assert!(json.contains(GENERIC));
        assert!(fault.to_string().contains("relation \"sales\" does not exist"));
    }

    #[test]
    fn client_faults_are_verbatim() {
        let fault = Fault::NotFound("Table not found".into());
        let value = serde_json::to_value(fault.envelope()).unwrap();
        assert!(value == serde_json::json!({ "code": 404, "name": "Not Found", "description": "Table not found" }));
    }
}
