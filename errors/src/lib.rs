#[macro_use]
extern crate log;

use actix_web::{
    error::{BlockingError, ResponseError},
    http::StatusCode,
    HttpResponse,
};
use derive_more::Display;
use diesel::result::{DatabaseErrorKind, Error as DBError};
use r2d2::Error as PoolError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    BadRequest(String),
    InternalServerError(String),
    NotFound(String),
    PoolError(String),
    BlockingError(String),
}

/// JSON body sent with 400 and 404 responses.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::BadRequest(error) => HttpResponse::BadRequest().json(ErrorResponse::from(error)),
            Error::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse::from(message)),
            _ => HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl From<&str> for ErrorResponse {
    fn from(error: &str) -> Self {
        ErrorResponse {
            errors: vec![error.into()],
        }
    }
}

impl From<&String> for ErrorResponse {
    fn from(error: &String) -> Self {
        error.as_str().into()
    }
}

impl From<Vec<String>> for ErrorResponse {
    fn from(error: Vec<String>) -> Self {
        ErrorResponse { errors: error }
    }
}

// Unique violations surface as 400s; a missing row as 404.
impl From<DBError> for Error {
    fn from(error: DBError) -> Error {
        match error {
            DBError::DatabaseError(kind, info) => {
                if let DatabaseErrorKind::UniqueViolation = kind {
                    let message = info.details().unwrap_or_else(|| info.message()).to_string();
                    return Error::BadRequest(message);
                }
                error!("Database error - {}", info.message());
                Error::InternalServerError("Unknown database error".into())
            }
            DBError::NotFound => Error::NotFound("Record not found".into()),
            other => {
                error!("Database error - {}", other);
                Error::InternalServerError("Unknown database error".into())
            }
        }
    }
}

impl From<PoolError> for Error {
    fn from(error: PoolError) -> Error {
        Error::PoolError(error.to_string())
    }
}

impl From<BlockingError> for Error {
    fn from(_: BlockingError) -> Error {
        Error::BlockingError("Thread blocking error".into())
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{body::to_bytes, http::StatusCode, ResponseError};
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DBError};

    use super::{Error, ErrorResponse};

    struct Info {
        message: &'static str,
        details: Option<&'static str>,
    }

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            self.message
        }

        fn details(&self) -> Option<&str> {
            self.details
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn unique_violation_becomes_bad_request() {
        let error: Error = DBError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(Info {
                message: "duplicate key value",
                details: Some("Key (id)=(1) already exists."),
            }),
        )
        .into();
        assert_eq!(error, Error::BadRequest("Key (id)=(1) already exists.".into()));

        let error: Error = DBError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(Info {
                message: "duplicate key value",
                details: None,
            }),
        )
        .into();
        assert_eq!(error, Error::BadRequest("duplicate key value".into()));
    }

    #[test]
    fn other_database_errors_are_internal() {
        let error: Error = DBError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new(Info {
                message: "violates foreign key constraint",
                details: None,
            }),
        )
        .into();
        assert_eq!(
            error,
            Error::InternalServerError("Unknown database error".into())
        );
    }

    #[test]
    fn diesel_not_found_becomes_not_found() {
        let error: Error = DBError::NotFound.into();
        assert_eq!(error, Error::NotFound("Record not found".into()));
    }

    #[test]
    fn other_diesel_errors_are_internal() {
        let error: Error = DBError::RollbackTransaction.into();
        assert_eq!(
            error,
            Error::InternalServerError("Unknown database error".into())
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            Error::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::PoolError("pool".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_rt::test]
    async fn not_found_renders_json_body() {
        let res = Error::NotFound("Question not found".into()).error_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(res.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.errors, vec!["Question not found".to_string()]);
    }
}
