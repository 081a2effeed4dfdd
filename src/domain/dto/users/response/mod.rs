//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 전달하는 응답 스키마입니다.
//!
//! - **데이터 은닉**: 비밀번호 해시 등 민감한 정보는 응답에서 제외
//! - **ORM 모드**: DB 레코드에서 바로 생성 가능 ([`crate::core::FromAttributes`])
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": 1,
//!   "username": "alice",
//!   "age": null
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
