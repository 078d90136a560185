use crate::error::{ValidationError, ValidationResult};
use crate::validator::FieldValidator;
use once_cell::sync::Lazy;
use regex::Regex;
use zogo_core::Value;

/// 邮箱格式：本地部分、`@`、域名、点、至少两个字母的顶级域
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

fn require_str(value: &Value) -> ValidationResult<&str> {
    value
        .as_str()
        .ok_or(ValidationError::TypeMismatch("must be a string"))
}

/// 字符串类型守卫，null 视为合法（可选字段）
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSchema;

impl FieldValidator for StringSchema {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        match value {
            Value::Null | Value::String(_) => Ok(()),
            _ => Err(ValidationError::TypeMismatch("must be a string or nil")),
        }
    }
}

/// 数字类型守卫，只接受浮点变体，null 视为合法
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSchema;

impl FieldValidator for NumberSchema {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        match value {
            Value::Null | Value::Float(_) => Ok(()),
            _ => Err(ValidationError::TypeMismatch("must be a number or nil")),
        }
    }
}

/// 布尔类型守卫，null 视为合法
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSchema;

impl FieldValidator for BooleanSchema {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        match value {
            Value::Null | Value::Bool(_) => Ok(()),
            _ => Err(ValidationError::TypeMismatch("must be a boolean or nil")),
        }
    }
}

/// 邮箱格式校验，null 和空字符串视为合法
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailSchema;

impl FieldValidator for EmailSchema {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let email = match value {
            Value::Null => return Ok(()),
            Value::String(s) if s.is_empty() => return Ok(()),
            Value::String(s) => s,
            _ => return Err(ValidationError::TypeMismatch("must be a string or nil")),
        };

        if !is_email(email) {
            return Err(ValidationError::constraint("invalid email format"));
        }
        Ok(())
    }
}

/// 字符串非空
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmpty;

impl FieldValidator for NotEmpty {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        if require_str(value)?.is_empty() {
            return Err(ValidationError::constraint("cannot be empty"));
        }
        Ok(())
    }
}

/// 最小长度（按字节计）
#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl FieldValidator for MinLength {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        if require_str(value)?.len() < self.0 {
            return Err(ValidationError::constraint(format!(
                "must have a minimum length of {}",
                self.0
            )));
        }
        Ok(())
    }
}

/// 最大长度（按字节计）
#[derive(Debug, Clone, Copy)]
pub struct MaxLength(pub usize);

impl FieldValidator for MaxLength {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        if require_str(value)?.len() > self.0 {
            return Err(ValidationError::constraint(format!(
                "must have a maximum length of {}",
                self.0
            )));
        }
        Ok(())
    }
}

/// 整数下界，只接受整数变体
#[derive(Debug, Clone, Copy)]
pub struct MinValue(pub i64);

impl FieldValidator for MinValue {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let num = value
            .as_i64()
            .ok_or(ValidationError::TypeMismatch("must be an integer"))?;
        if num < self.0 {
            return Err(ValidationError::constraint(format!(
                "must be greater than or equal to {}",
                self.0
            )));
        }
        Ok(())
    }
}

/// 浮点上界，只接受浮点变体
#[derive(Debug, Clone, Copy)]
pub struct MaxValue(pub f64);

impl FieldValidator for MaxValue {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let num = value
            .as_f64()
            .ok_or(ValidationError::TypeMismatch("must be a number"))?;
        if num > self.0 {
            return Err(ValidationError::constraint(format!(
                "must be less than or equal to {:.6}",
                self.0
            )));
        }
        Ok(())
    }
}

/// 正则格式校验
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    pub fn from_regex(regex: Regex) -> Self {
        Self(regex)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FieldValidator for Pattern {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        if !self.0.is_match(require_str(value)?) {
            return Err(ValidationError::constraint(format!(
                "must match pattern {}",
                self.0.as_str()
            )));
        }
        Ok(())
    }
}

pub fn min_length(min: usize) -> MinLength {
    MinLength(min)
}

pub fn max_length(max: usize) -> MaxLength {
    MaxLength(max)
}

pub fn min_value(min: i64) -> MinValue {
    MinValue(min)
}

pub fn max_value(max: f64) -> MaxValue {
    MaxValue(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: ValidationResult<()>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_type_guards_accept_null() {
        assert!(StringSchema.validate(&Value::Null).is_ok());
        assert!(NumberSchema.validate(&Value::Null).is_ok());
        assert!(BooleanSchema.validate(&Value::Null).is_ok());
        assert!(EmailSchema.validate(&Value::Null).is_ok());
    }

    #[test]
    fn test_type_guards() {
        assert!(StringSchema.validate(&"x".into()).is_ok());
        assert_eq!(message(StringSchema.validate(&Value::Int(1))), "must be a string or nil");

        assert!(NumberSchema.validate(&Value::Float(1.5)).is_ok());
        assert_eq!(message(NumberSchema.validate(&Value::Int(1))), "must be a number or nil");

        assert!(BooleanSchema.validate(&Value::Bool(false)).is_ok());
        assert_eq!(message(BooleanSchema.validate(&"true".into())), "must be a boolean or nil");
    }

    #[test]
    fn test_email_schema() {
        assert!(EmailSchema.validate(&"".into()).is_ok());
        assert!(EmailSchema.validate(&"john.doe+tag@mail.example.com".into()).is_ok());
        assert_eq!(message(EmailSchema.validate(&"a@b.c".into())), "invalid email format");
        assert_eq!(message(EmailSchema.validate(&"no-at-sign.com".into())), "invalid email format");
        assert_eq!(message(EmailSchema.validate(&Value::Bool(true))), "must be a string or nil");
    }

    #[test]
    fn test_not_empty() {
        assert!(NotEmpty.validate(&" ".into()).is_ok());
        assert_eq!(message(NotEmpty.validate(&"".into())), "cannot be empty");
        assert_eq!(message(NotEmpty.validate(&Value::Null)), "must be a string");
    }

    #[test]
    fn test_length_bounds() {
        assert!(min_length(3).validate(&"abc".into()).is_ok());
        assert_eq!(message(min_length(3).validate(&"ab".into())), "must have a minimum length of 3");
        assert_eq!(message(min_length(3).validate(&Value::Int(123))), "must be a string");

        assert!(max_length(3).validate(&"abc".into()).is_ok());
        assert_eq!(message(max_length(3).validate(&"abcd".into())), "must have a maximum length of 3");
    }

    #[test]
    fn test_length_counts_bytes() {
        // "é" 占两个字节
        assert!(max_length(1).validate(&"é".into()).is_err());
        assert!(min_length(2).validate(&"é".into()).is_ok());
    }

    #[test]
    fn test_min_value_requires_integer() {
        assert!(min_value(18).validate(&Value::Int(18)).is_ok());
        assert_eq!(
            message(min_value(18).validate(&Value::Int(16))),
            "must be greater than or equal to 18"
        );
        assert_eq!(message(min_value(18).validate(&Value::Float(20.0))), "must be an integer");
    }

    #[test]
    fn test_max_value_requires_float() {
        assert!(max_value(10.0).validate(&Value::Float(10.0)).is_ok());
        assert_eq!(
            message(max_value(10.0).validate(&Value::Float(10.5))),
            "must be less than or equal to 10.000000"
        );
        assert_eq!(message(max_value(10.0).validate(&Value::Int(5))), "must be a number");
    }

    #[test]
    fn test_pattern() {
        let zip = Pattern::new(r"^\d{5}$").unwrap();
        assert!(zip.validate(&"12345".into()).is_ok());
        assert_eq!(message(zip.validate(&"1234".into())), r"must match pattern ^\d{5}$");
        assert_eq!(message(zip.validate(&Value::Int(12345))), "must be a string");

        assert!(Pattern::new("(").is_err());
    }
}
