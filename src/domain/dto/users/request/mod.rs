//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 검증하고 변환합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use user_schemas::{Schema, SchemaValidationError, UserCreateRequest};
//!
//! #[actix_web::post("/users")]
//! async fn create_user(body: String) -> Result<HttpResponse, SchemaValidationError> {
//!     // 검증 실패 시 422 응답으로 자동 변환
//!     let request = UserCreateRequest::validate_json(&body)?;
//!     // ...
//!     Ok(HttpResponse::Created().finish())
//! }
//! ```

pub mod create_user;
pub mod update_user;

pub use create_user::UserCreateRequest;
pub use update_user::UserUpdateRequest;
