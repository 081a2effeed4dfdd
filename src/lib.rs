//! 사용자 리소스 스키마
//!
//! 웹 API의 사용자 리소스에 대한 요청/응답 스키마와 그 검증 계층입니다.
//! 원시 입력(JSON 매핑 또는 DB 레코드)을 검증하여 타입이 지정된 인스턴스를 생성하고,
//! 실패 시 문제가 있는 모든 필드를 담은 에러를 반환합니다.
//!
//! # Features
//!
//! - **요청 스키마**: `UserCreateRequest`, `UserUpdateRequest`
//! - **응답 스키마**: `UserResponse` (ORM 모드 지원)
//! - **전체 에러 수집**: 첫 번째 실패에서 멈추지 않고 모든 필드 문제를 보고
//! - **HTTP 통합**: `SchemaValidationError`는 Actix-Web `ResponseError` (422)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │  JSON body / Map     │      │  DB record (User)    │
//! └──────────────────────┘      └──────────────────────┘
//!            │                             │ attributes_to_map()
//!            ▼                             ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              Schema::validate()                     │
//! └─────────────────────────────────────────────────────┘
//!            │                             │
//!            ▼                             ▼
//!     typed schema                SchemaValidationError
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use serde_json::json;
//! use user_schemas::{FromAttributes, Schema, User, UserCreateRequest, UserResponse};
//!
//! let request = UserCreateRequest::validate_value(
//!     &json!({ "username": "bob", "password": "secret", "age": 25 }),
//! )?;
//!
//! let record = User::new(1, request.username(), "$2b$12$...", Some(request.age()));
//! let response = UserResponse::from_attributes(&record)?;
//! ```

pub mod core;
pub mod domain;

pub use crate::core::{
    attributes_to_map, AttributeSource, FieldError, FieldKind, FieldProblem, FieldSpec,
    FromAttributes, Schema, SchemaResult, SchemaValidationError,
};
pub use crate::domain::dto::users::{UserCreateRequest, UserResponse, UserUpdateRequest};
pub use crate::domain::entities::users::User;
