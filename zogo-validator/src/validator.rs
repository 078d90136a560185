use crate::error::ValidationResult;
use std::fmt;
use std::sync::Arc;
use zogo_core::Value;

/// 字段校验器 trait
///
/// 唯一的校验契约：输入一个无类型值，返回 `Ok(())` 或一个描述性错误。
/// 实现必须是确定性的，且不能修改输入。
pub trait FieldValidator: Send + Sync {
    fn validate(&self, value: &Value) -> ValidationResult<()>;

    /// 转换为可共享的 [`Validator`]
    fn boxed(self) -> Validator
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// 类型擦除后的校验器，可在多个组合器之间共享
pub type Validator = Arc<dyn FieldValidator>;

impl<T: FieldValidator + ?Sized> FieldValidator for Arc<T> {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        (**self).validate(value)
    }
}

impl<T: FieldValidator + ?Sized> FieldValidator for Box<T> {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        (**self).validate(value)
    }
}

/// 由闭包构造的校验器，见 [`from_fn`]
#[derive(Clone)]
pub struct FnValidator<F> {
    f: F,
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

impl<F> FieldValidator for FnValidator<F>
where
    F: Fn(&Value) -> ValidationResult<()> + Send + Sync,
{
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        (self.f)(value)
    }
}

/// 用闭包定义自定义规则
///
/// ```
/// use zogo_validator::{from_fn, FieldValidator, ValidationError};
/// use zogo_core::Value;
///
/// let even = from_fn(|value: &Value| match value.as_i64() {
///     Some(n) if n % 2 == 0 => Ok(()),
///     Some(_) => Err(ValidationError::constraint("must be even")),
///     None => Err(ValidationError::TypeMismatch("must be an integer")),
/// });
///
/// assert!(even.validate(&Value::Int(4)).is_ok());
/// assert_eq!(even.validate(&Value::Int(3)).unwrap_err().to_string(), "must be even");
/// ```
pub fn from_fn<F>(f: F) -> FnValidator<F>
where
    F: Fn(&Value) -> ValidationResult<()> + Send + Sync,
{
    FnValidator { f }
}

/// 构造 `Vec<Validator>`，元素可以是任意 [`FieldValidator`]
///
/// ```
/// use zogo_validator::{validators, combine, FieldValidator, MinLength, StringSchema};
///
/// let name = combine(validators![StringSchema, MinLength(2)]);
/// assert!(name.validate(&"ann".into()).is_ok());
/// ```
#[macro_export]
macro_rules! validators {
    () => {
        ::std::vec::Vec::<$crate::Validator>::new()
    };
    ($($validator:expr),+ $(,)?) => {
        ::std::vec![$($crate::FieldValidator::boxed($validator)),+]
    };
}
