//! # Schema Declarations
//!
//! 필드 이름, 타입, 필수 여부를 선언하고 그 선언에 따라 원시 입력을 검증하여
//! 타입이 지정된 인스턴스를 생성하는 계약(`Schema`)을 정의합니다.
//!
//! ## 검증 단계
//!
//! 1. **형태 검증**: 선언된 모든 필드를 순회하며 누락/`null`/타입 불일치를 수집
//!    (정수로 읽히는 문자열과 소수부 없는 실수는 이 단계에서 정수로 정규화)
//! 2. **생성**: 문제가 하나도 없을 때만 `serde`로 구조체를 역직렬화
//!
//! 선언되지 않은 키는 무시됩니다.

use std::num::IntErrorKind;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use crate::core::errors::{FieldError, FieldProblem, SchemaResult, SchemaValidationError};

/// 필드의 의미상 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 부호 있는 64비트 정수
    ///
    /// - JSON 정수는 그대로 허용
    /// - 정수로 읽히는 문자열(`"25"`)과 소수부가 없는 실수(`25.0`)는 정수로 변환
    /// - `"thirty"`, `25.5`, `true` 등은 거부
    Integer,
    String,
}

impl FieldKind {
    /// 값을 검사하고 스키마 타입에 맞게 정규화한 값을 반환합니다.
    fn coerce(self, value: &Value) -> Result<Value, FieldProblem> {
        match (self, value) {
            (FieldKind::Integer, Value::Number(n)) => coerce_number(n),
            (FieldKind::Integer, Value::String(s)) => coerce_integer_str(s),
            (FieldKind::Integer, _) => Err(FieldProblem::NotAnInteger),
            (FieldKind::String, Value::String(_)) => Ok(value.clone()),
            (FieldKind::String, _) => Err(FieldProblem::NotAString),
        }
    }
}

// serde_json은 u64 범위를 넘는 정수와 i64::MIN 미만의 정수를 f64로 저장한다
fn coerce_number(n: &Number) -> Result<Value, FieldProblem> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    if n.is_u64() {
        return Err(FieldProblem::IntegerOutOfRange);
    }
    match n.as_f64() {
        Some(f) if f.fract() != 0.0 || !f.is_finite() => Err(FieldProblem::NotAnInteger),
        // i64::MAX as f64 는 2^63 이므로 상한은 미포함
        Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(Value::from(f as i64)),
        Some(_) => Err(FieldProblem::IntegerOutOfRange),
        None => Err(FieldProblem::NotAnInteger),
    }
}

fn coerce_integer_str(s: &str) -> Result<Value, FieldProblem> {
    match s.trim().parse::<i64>() {
        Ok(i) => Ok(Value::from(i)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(FieldProblem::IntegerOutOfRange)
            }
            _ => Err(FieldProblem::NotAnInteger),
        },
    }
}

/// 스키마 필드 하나의 선언
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true }
    }

    /// 생략하거나 `null`을 넣을 수 있는 필드
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }

    /// 값 하나를 검사하고 정규화합니다. 입력의 `None`은 키가 없음을 뜻합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(value))` - 타입에 맞게 정규화된 값
    /// * `Ok(None)` - 선택 필드가 없거나 `null`
    /// * `Err(FieldProblem)` - 누락 또는 타입 불일치
    pub fn check(&self, value: Option<&Value>) -> Result<Option<Value>, FieldProblem> {
        match value {
            None | Some(Value::Null) if !self.required => Ok(None),
            None => Err(FieldProblem::Missing),
            Some(Value::Null) => Err(FieldProblem::NullNotAllowed),
            Some(value) => self.kind.coerce(value).map(Some),
        }
    }
}

/// 선언된 필드를 기준으로 검증 후 생성 가능한 레코드
///
/// 구현체는 `NAME`과 `FIELDS`만 선언하면 됩니다.
/// `FIELDS`의 이름은 구조체의 `serde` 필드 이름과 일치해야 합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use serde_json::json;
/// use user_schemas::{Schema, UserCreateRequest};
///
/// let raw = json!({ "username": "bob", "password": "secret", "age": 25 });
/// let request = UserCreateRequest::validate_value(&raw)?;
///
/// assert_eq!(request.username(), "bob");
/// ```
pub trait Schema: DeserializeOwned {
    /// 에러 메시지에 표시되는 스키마 이름
    const NAME: &'static str;

    /// 선언 순서대로 정렬된 필드 목록
    const FIELDS: &'static [FieldSpec];

    fn fields() -> &'static [FieldSpec] {
        Self::FIELDS
    }

    /// 키/값 매핑을 검증하고 인스턴스를 생성합니다.
    ///
    /// 실패 시 첫 번째 문제에서 멈추지 않고 모든 필드의 문제를 모아 반환합니다.
    fn validate(raw: &Map<String, Value>) -> SchemaResult<Self> {
        let mut declared = Map::new();
        let mut errors = Vec::new();

        for spec in Self::FIELDS {
            match spec.check(raw.get(spec.name)) {
                Ok(Some(value)) => {
                    declared.insert(spec.name.to_string(), value);
                }
                Ok(None) => {}
                Err(problem) => errors.push(FieldError::new(spec.name, problem)),
            }
        }

        if !errors.is_empty() {
            let error = SchemaValidationError::new(Self::NAME, errors);
            debug!("{} rejected, failing fields: {:?}", Self::NAME, error.fields());
            return Err(error);
        }

        // FIELDS와 구조체 정의가 어긋난 경우에만 실패
        serde_json::from_value(Value::Object(declared)).map_err(|e| {
            SchemaValidationError::root(Self::NAME, FieldProblem::InvalidJson(e.to_string()))
        })
    }

    /// 임의의 JSON 값을 검증합니다. 객체가 아니면 `__root__` 에러를 반환합니다.
    fn validate_value(raw: &Value) -> SchemaResult<Self> {
        match raw {
            Value::Object(map) => Self::validate(map),
            _ => Err(SchemaValidationError::root(Self::NAME, FieldProblem::NotAnObject)),
        }
    }

    /// 요청 본문(JSON 문자열)을 검증합니다.
    fn validate_json(body: &str) -> SchemaResult<Self> {
        let raw: Value = serde_json::from_str(body).map_err(|e| {
            SchemaValidationError::root(Self::NAME, FieldProblem::InvalidJson(e.to_string()))
        })?;
        Self::validate_value(&raw)
    }
}
