//! # Domain Entities
//!
//! 영속 계층에서 읽어 온 레코드입니다. 응답 스키마는 이 레코드의 속성을
//! 이름으로 읽어서 생성됩니다.

pub mod users;

pub use users::*;
