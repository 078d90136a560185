//! Zogo Validator - 字段级数据校验
//!
//! 对解码后的松散记录（字段名 -> 无类型值）逐字段执行可组合的校验规则，
//! 返回遇到的第一个错误。
//!
//! ```
//! use zogo_validator::prelude::*;
//! use zogo_core::Value;
//!
//! let rules = RuleValidator::new()
//!     .rule("email", validators![email_min_max_length(5, 20)])
//!     .rule("username", validators![StringValidator::builder().non_empty().min(3).build()])
//!     .rule("address", validators![ObjectSchema::default().field("city", NotEmpty)]);
//!
//! let input = Value::from_json_str(
//!     r#"{"email": "a@b.co", "username": "ann", "address": {"city": "Oslo"}}"#,
//! ).unwrap();
//! assert!(rules.validate_value(&input).is_ok());
//! ```

pub mod combinator;
pub mod error;
pub mod object;
pub mod record;
pub mod rules;
pub mod string;
pub mod validator;

pub use combinator::*;
pub use error::*;
pub use object::*;
pub use record::*;
pub use rules::*;
pub use string::*;
pub use validator::*;

/// Prelude 模块，包含常用的 trait、校验器和宏
pub mod prelude {
    pub use crate::combinator::{combine, email_min_max_length, second_level_field, Combined};
    pub use crate::error::{ValidationError, ValidationResult};
    pub use crate::object::ObjectSchema;
    pub use crate::record::RuleValidator;
    pub use crate::rules::{
        max_length, max_value, min_length, min_value, BooleanSchema, EmailSchema, MaxLength,
        MaxValue, MinLength, MinValue, NotEmpty, NumberSchema, Pattern, StringSchema,
    };
    pub use crate::string::{StringValidator, StringValidatorBuilder};
    pub use crate::validator::{from_fn, FieldValidator, Validator};
    pub use crate::validators;
}
