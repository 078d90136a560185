use crate::error::{ValidationError, ValidationResult};
use crate::rules::is_email;
use crate::validator::FieldValidator;
use zogo_core::Value;

/// 单项字符串检查，类型检查已由 [`StringValidator`] 统一完成
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringCheck {
    NonEmpty,
    Min(usize),
    Max(usize),
    Email,
}

impl StringCheck {
    fn check(&self, value: &str) -> ValidationResult<()> {
        match *self {
            StringCheck::NonEmpty if value.is_empty() => {
                Err(ValidationError::constraint("cannot be empty"))
            }
            StringCheck::Min(min) if value.len() < min => Err(ValidationError::constraint(
                format!("must have a minimum length of {min}"),
            )),
            StringCheck::Max(max) if value.len() > max => Err(ValidationError::constraint(
                format!("must have a maximum length of {max}"),
            )),
            StringCheck::Email if !is_email(value) => {
                Err(ValidationError::constraint("invalid email format"))
            }
            _ => Ok(()),
        }
    }
}

/// 流式字符串校验构建器
///
/// 每个方法追加一项检查，`build()` 之后得到不可变的 [`StringValidator`]。
///
/// ```
/// use zogo_validator::{FieldValidator, StringValidator};
///
/// let username = StringValidator::builder().non_empty().min(3).build();
///
/// assert!(username.validate(&"abcd".into()).is_ok());
/// assert_eq!(
///     username.validate(&"ab".into()).unwrap_err().to_string(),
///     "must have a minimum length of 3"
/// );
/// ```
#[derive(Debug, Clone, Default)]
#[must_use = "call `build()` to obtain a validator"]
pub struct StringValidatorBuilder {
    checks: Vec<StringCheck>,
}

impl StringValidatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn non_empty(mut self) -> Self {
        self.checks.push(StringCheck::NonEmpty);
        self
    }

    /// 最小长度（字节）
    pub fn min(mut self, min_length: usize) -> Self {
        self.checks.push(StringCheck::Min(min_length));
        self
    }

    /// 最大长度（字节）
    pub fn max(mut self, max_length: usize) -> Self {
        self.checks.push(StringCheck::Max(max_length));
        self
    }

    pub fn email(mut self) -> Self {
        self.checks.push(StringCheck::Email);
        self
    }

    pub fn build(self) -> StringValidator {
        tracing::trace!("Built string validator with {} checks", self.checks.len());
        StringValidator {
            checks: self.checks,
        }
    }
}

/// 已完成构建的字符串校验器
#[derive(Debug, Clone)]
pub struct StringValidator {
    checks: Vec<StringCheck>,
}

impl StringValidator {
    pub fn builder() -> StringValidatorBuilder {
        StringValidatorBuilder::new()
    }
}

impl FieldValidator for StringValidator {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let value = value
            .as_str()
            .ok_or(ValidationError::TypeMismatch("must be a string"))?;

        self.checks.iter().try_for_each(|check| check.check(value))
    }
}
