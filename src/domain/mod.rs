//! # Domain Layer Module
//!
//! 사용자 리소스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 영속 계층 레코드 (ORM 모드의 입력)
//! └── DTOs      - API 경계의 요청/응답 스키마
//! ```
//!
//! 세 스키마는 같은 "사용자" 개념에 대한 독립적인 뷰이며 서로를 참조하지 않습니다.
//!
//! | 스키마 | 방향 | 필드 |
//! |--------|------|------|
//! | `UserResponse` | outbound | `id`, `username`, `age?` |
//! | `UserCreateRequest` | inbound | `username`, `password`, `age` |
//! | `UserUpdateRequest` | inbound | `password`, `age` |

pub mod dto;
pub mod entities;
