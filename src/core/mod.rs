//! # Core Schema Module
//!
//! 사용자 스키마들이 공유하는 검증 기반을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`schema`] - 스키마 선언과 검증
//! - **FieldSpec**: 필드 이름, 타입, 필수 여부 선언
//! - **Schema**: 원시 입력을 검증하고 인스턴스를 생성하는 계약
//!
//! ### [`attributes`] - ORM 모드
//! - **AttributeSource**: 이름으로 속성을 읽을 수 있는 객체
//! - **FromAttributes**: DB 레코드에서 스키마를 생성하는 어댑터
//!
//! ### [`errors`] - 검증 에러
//! - **SchemaValidationError**: 실패한 모든 필드를 담는 단일 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (422)

pub mod attributes;
pub mod errors;
pub mod schema;

pub use attributes::*;
pub use errors::*;
pub use schema::*;
