//! # Schema Validation Errors
//!
//! 스키마 검증 실패를 표현하는 에러 타입입니다.
//! 하나의 입력에서 발견된 **모든** 필드 문제를 한 번에 모아서 반환하므로,
//! 호출자(요청 핸들러)는 어떤 필드가 왜 실패했는지 전부 확인할 수 있습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | 타입 | HTTP Status | 사용 시나리오 |
//! |------|-------------|---------------|
//! | `SchemaValidationError` | 422 Unprocessable Entity | 필수 필드 누락, 타입 불일치, 잘못된 JSON 본문 |
//!
//! ## 응답 본문 예제
//!
//! ```json
//! {
//!   "error": "2 validation errors for UserCreateRequest: password: field required; age: value is not a valid integer",
//!   "details": {
//!     "password": ["field required"],
//!     "age": ["value is not a valid integer"]
//!   }
//! }
//! ```

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{Map, Value};
use thiserror::Error;

/// 본문 전체(필드가 아닌 입력 자체)에 대한 에러를 표시하는 필드 이름
pub const ROOT_FIELD: &str = "__root__";

/// 한 필드에서 발견된 문제의 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// 필수 필드가 입력에 없음
    Missing,
    /// 필수 필드에 `null`이 들어옴
    NullNotAllowed,
    /// 정수 필드에 정수가 아닌 값이 들어옴
    NotAnInteger,
    /// 정수이지만 `i64` 범위를 벗어남
    IntegerOutOfRange,
    /// 문자열 필드에 문자열이 아닌 값이 들어옴
    NotAString,
    /// 입력이 JSON 객체가 아님
    NotAnObject,
    /// 요청 본문이 올바른 JSON이 아님
    InvalidJson(String),
}

impl FieldProblem {
    /// 클라이언트가 분기 처리에 사용할 수 있는 고정 코드
    pub fn code(&self) -> &'static str {
        match self {
            FieldProblem::Missing => "missing",
            FieldProblem::NullNotAllowed => "null_not_allowed",
            FieldProblem::NotAnInteger => "not_an_integer",
            FieldProblem::IntegerOutOfRange => "integer_out_of_range",
            FieldProblem::NotAString => "not_a_string",
            FieldProblem::NotAnObject => "not_an_object",
            FieldProblem::InvalidJson(_) => "invalid_json",
        }
    }
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::Missing => f.write_str("field required"),
            FieldProblem::NullNotAllowed => f.write_str("none is not an allowed value"),
            FieldProblem::NotAnInteger => f.write_str("value is not a valid integer"),
            FieldProblem::IntegerOutOfRange => f.write_str("integer is out of range"),
            FieldProblem::NotAString => f.write_str("str type expected"),
            FieldProblem::NotAnObject => f.write_str("value is not a valid object"),
            FieldProblem::InvalidJson(reason) => write!(f, "invalid JSON: {}", reason),
        }
    }
}

/// (필드 이름, 문제) 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl FieldError {
    pub fn new(field: &'static str, problem: FieldProblem) -> Self {
        Self { field, problem }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// 스키마 검증 실패
///
/// 생성 시점에 발생하며, 실패한 필드마다 하나의 [`FieldError`]를 가집니다.
/// 필드 순서는 스키마에 선언된 순서를 따릅니다.
///
/// # 예제
///
/// ```rust,ignore
/// use user_schemas::{Schema, UserUpdateRequest};
/// use serde_json::json;
///
/// let raw = json!({ "password": "secret" });
/// let err = UserUpdateRequest::validate_value(&raw).unwrap_err();
///
/// assert_eq!(err.fields(), vec!["age"]);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", describe(.schema, .errors))]
pub struct SchemaValidationError {
    schema: &'static str,
    errors: Vec<FieldError>,
}

fn describe(schema: &str, errors: &[FieldError]) -> String {
    let plural = if errors.len() == 1 { "" } else { "s" };
    let lines = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    format!("{} validation error{} for {}: {}", errors.len(), plural, schema, lines)
}

impl SchemaValidationError {
    pub fn new(schema: &'static str, errors: Vec<FieldError>) -> Self {
        Self { schema, errors }
    }

    /// 입력 전체에 대한 단일 에러 (`__root__`)
    pub fn root(schema: &'static str, problem: FieldProblem) -> Self {
        Self::new(schema, vec![FieldError::new(ROOT_FIELD, problem)])
    }

    /// 실패한 스키마 이름
    pub fn schema(&self) -> &'static str {
        self.schema
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// 실패한 필드 이름 목록 (선언 순서)
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// 특정 필드의 문제를 조회합니다. 해당 필드가 유효했다면 `None`.
    pub fn problem_for(&self, field: &str) -> Option<&FieldProblem> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.problem)
    }

    /// 응답 본문용 `필드 -> 메시지 목록` 맵 (에러 순서 유지)
    pub fn details(&self) -> Map<String, Value> {
        let mut details = Map::new();
        for error in &self.errors {
            let messages = details
                .entry(error.field)
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(messages) = messages {
                messages.push(Value::from(error.problem.to_string()));
            }
        }
        details
    }
}

impl ResponseError for SchemaValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    /// 검증 에러를 422 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
            "details": self.details(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type SchemaResult<T> = Result<T, SchemaValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_error() -> SchemaValidationError {
        SchemaValidationError::new(
            "UserCreateRequest",
            vec![
                FieldError::new("password", FieldProblem::Missing),
                FieldError::new("age", FieldProblem::NotAnInteger),
            ],
        )
    }

    #[test]
    fn test_display_lists_every_field() {
        let message = sample_error().to_string();

        assert_eq!(
            message,
            "2 validation errors for UserCreateRequest: password: field required; age: value is not a valid integer"
        );
    }

    #[test]
    fn test_display_singular() {
        let error = SchemaValidationError::root("UserResponse", FieldProblem::NotAnObject);

        assert_eq!(
            error.to_string(),
            "1 validation error for UserResponse: __root__: value is not a valid object"
        );
    }

    #[test]
    fn test_accessors() {
        let error = sample_error();

        assert_eq!(error.schema(), "UserCreateRequest");
        assert_eq!(error.fields(), vec!["password", "age"]);
        assert_eq!(error.problem_for("age"), Some(&FieldProblem::NotAnInteger));
        assert_eq!(error.problem_for("username"), None);
    }

    #[test]
    fn test_problem_codes() {
        assert_eq!(FieldProblem::Missing.code(), "missing");
        assert_eq!(FieldProblem::NullNotAllowed.code(), "null_not_allowed");
        assert_eq!(FieldProblem::InvalidJson("eof".to_string()).code(), "invalid_json");
    }

    #[test]
    fn test_validation_error_status() {
        let response = sample_error().error_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_validation_error_body() {
        let response = sample_error().error_response();
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["details"]["password"][0], "field required");
        assert_eq!(json["details"]["age"][0], "value is not a valid integer");
        assert!(json["error"].as_str().unwrap().starts_with("2 validation errors"));
    }

    #[actix_web::test]
    async fn test_validation_error_body_keeps_field_order() {
        let response = sample_error().error_response();
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let keys: Vec<&str> = json["details"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(keys, vec!["password", "age"]);
    }

    #[test]
    fn test_details_groups_by_field() {
        let error = SchemaValidationError::new(
            "UserUpdateRequest",
            vec![
                FieldError::new("password", FieldProblem::NotAString),
                FieldError::new("age", FieldProblem::Missing),
            ],
        );

        let details = error.details();

        assert_eq!(details.keys().map(String::as_str).collect::<Vec<_>>(), vec!["password", "age"]);
        assert_eq!(details["age"], serde_json::json!(["field required"]));
    }
}
