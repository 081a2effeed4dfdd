//! # Data Transfer Objects
//!
//! API 경계를 넘는 데이터의 형태를 정의합니다.
//!
//! ## 명명 규칙
//! - **Request DTO**: `{Entity}{Action}Request` (예: `UserCreateRequest`)
//! - **Response DTO**: `{Entity}Response` (예: `UserResponse`)
//!
//! ## 필드 설계
//! - **필수 필드**: 기본 타입 사용 (`String`, `i64`)
//! - **선택적 필드**: `Option<T>` 사용
//! - **민감한 정보**: Response DTO에서 제외

pub mod users;

pub use users::*;
