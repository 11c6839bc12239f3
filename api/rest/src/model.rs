use actix_web::{
    error::ParseError,
    http::{
        header::{self, Header, HeaderName, HeaderValue, InvalidHeaderValue, TryIntoHeaderValue},
        StatusCode,
    },
    HttpMessage, HttpResponse, HttpResponseBuilder,
};
use serde::Serialize;
use ub_error::Error;

pub mod auth;
pub mod record;
pub mod user;

#[derive(Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl Response {
    pub fn data<T: Serialize>(
        status_code: &StatusCode,
        pagination: &Option<PaginationRes>,
        data: T,
    ) -> HttpResponse {
        match serde_json::to_value(data) {
            Ok(data) => HttpResponseBuilder::new(*status_code).json(Self {
                error: None,
                pagination: *pagination,
                data: Some(data),
            }),
            Err(err) => {
                ub_log::error(None, &err);
                Self::error(&Error::InternalServerError(err.to_string()))
            }
        }
    }

    pub fn error(err: &Error) -> HttpResponse {
        let status_code = match err {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self::error_raw(&status_code, err.message())
    }

    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        ub_log::error(None, message);

        HttpResponseBuilder::new(*status_code).json(Self {
            error: Some(ErrorRes {
                status: match status_code.canonical_reason() {
                    Some(reason) => reason.to_owned(),
                    None => "Unknown".to_owned(),
                },
                message: message.to_owned(),
            }),
            pagination: None,
            data: None,
        })
    }
}

#[derive(Serialize)]
pub struct ErrorRes {
    status: String,
    message: String,
}

#[derive(Serialize, Clone, Copy)]
pub struct PaginationRes {
    count: usize,
    total: usize,
}

impl PaginationRes {
    pub fn new(count: &usize, total: &usize) -> Self {
        Self {
            count: *count,
            total: *total,
        }
    }
}

/// Authorization header carrying the bearer token, accepted both as a raw
/// token and with the `Bearer ` scheme prefix.
pub struct TokenReqHeader(Option<String>);

impl TokenReqHeader {
    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl Header for TokenReqHeader {
    fn name() -> HeaderName {
        header::AUTHORIZATION
    }

    fn parse<M: HttpMessage>(msg: &M) -> Result<Self, ParseError> {
        Ok(Self(
            msg.headers()
                .get(Self::name())
                .and_then(|value| value.to_str().ok())
                .map(|value| match value.strip_prefix("Bearer ") {
                    Some(token) => token.to_owned(),
                    None => value.to_owned(),
                }),
        ))
    }
}

impl TryIntoHeaderValue for TokenReqHeader {
    type Error = InvalidHeaderValue;

    fn try_into_value(self) -> Result<HeaderValue, Self::Error> {
        HeaderValue::from_str(self.0.as_deref().unwrap_or_default())
    }
}
