use crate::error::ValidationResult;
use crate::rules::{EmailSchema, MaxLength, MinLength, StringSchema};
use crate::validator::{FieldValidator, Validator};
use crate::validators;
use zogo_core::Value;

/// 多个校验器的合取
///
/// 按顺序对同一个值执行，遇到第一个错误即返回；没有校验器时总是通过。
#[derive(Clone, Default)]
pub struct Combined {
    validators: Vec<Validator>,
}

impl Combined {
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl FieldValidator for Combined {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        self.validators
            .iter()
            .try_for_each(|validator| validator.validate(value))
    }
}

impl FromIterator<Validator> for Combined {
    fn from_iter<I: IntoIterator<Item = Validator>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

pub fn combine(validators: Vec<Validator>) -> Combined {
    Combined { validators }
}

/// 字符串类型、邮箱格式、最小长度、最大长度，依次校验
pub fn email_min_max_length(min: usize, max: usize) -> Combined {
    combine(validators![
        StringSchema,
        EmailSchema,
        MinLength(min),
        MaxLength(max),
    ])
}

/// 对映射中的单个可选字段执行校验
///
/// 输入不是映射或字段缺失时直接通过；与 [`ObjectSchema`](crate::ObjectSchema) 不同，缺失不算错误。
#[derive(Clone)]
pub struct SecondLevelField {
    field: String,
    validator: Validator,
}

impl FieldValidator for SecondLevelField {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        match value.as_object().and_then(|map| map.get(&self.field)) {
            Some(field_value) => self.validator.validate(field_value),
            None => Ok(()),
        }
    }
}

pub fn second_level_field(
    field: impl Into<String>,
    validator: impl FieldValidator + 'static,
) -> SecondLevelField {
    SecondLevelField {
        field: field.into(),
        validator: validator.boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::rules::{min_length, NotEmpty};
    use crate::validator::from_fn;
    use serde_json::json;

    #[test]
    fn test_combine_empty_passes() {
        let none = combine(Vec::new());
        assert!(none.is_empty());
        assert!(none.validate(&Value::Null).is_ok());
        assert!(none.validate(&Value::Int(7)).is_ok());
    }

    #[test]
    fn test_combine_reports_first_failure() {
        let combined = combine(validators![
            from_fn(|_: &Value| Err(ValidationError::constraint("first"))),
            from_fn(|_: &Value| Err(ValidationError::constraint("second"))),
        ]);
        assert_eq!(combined.validate(&Value::Null).unwrap_err().to_string(), "first");
    }

    #[test]
    fn test_combine_order_matters() {
        let non_empty_first = combine(validators![NotEmpty, min_length(3)]);
        let min_first = combine(validators![min_length(3), NotEmpty]);

        let empty = Value::from("");
        assert_eq!(non_empty_first.validate(&empty).unwrap_err().to_string(), "cannot be empty");
        assert_eq!(
            min_first.validate(&empty).unwrap_err().to_string(),
            "must have a minimum length of 3"
        );
    }

    #[test]
    fn test_combine_from_iter() {
        let combined: Combined = [StringSchema.boxed(), NotEmpty.boxed()].into_iter().collect();
        assert_eq!(combined.len(), 2);
        assert!(combined.validate(&"x".into()).is_ok());
    }

    #[test]
    fn test_email_min_max_length() {
        let email = email_min_max_length(5, 20);

        assert!(email.validate(&"a@b.co".into()).is_ok());
        assert_eq!(email.validate(&"a@b.c".into()).unwrap_err().to_string(), "invalid email format");
        assert_eq!(
            email.validate(&Value::Int(3)).unwrap_err().to_string(),
            "must be a string or nil"
        );
        assert_eq!(
            email.validate(&"averylongname@example.com".into()).unwrap_err().to_string(),
            "must have a maximum length of 20"
        );
    }

    #[test]
    fn test_email_min_max_length_rejects_null_at_length_check() {
        // 类型守卫和邮箱校验放行 null，但长度校验要求字符串
        let email = email_min_max_length(5, 20);
        assert_eq!(
            email.validate(&Value::Null).unwrap_err().to_string(),
            "must be a string"
        );
    }

    #[test]
    fn test_second_level_field() {
        let here = second_level_field("here", NotEmpty);

        assert!(here.validate(&Value::from(json!({"here": "x"}))).is_ok());
        assert!(here.validate(&Value::from(json!({"elsewhere": ""}))).is_ok());
        assert!(here.validate(&Value::from("not a map")).is_ok());
        assert_eq!(
            here.validate(&Value::from(json!({"here": ""}))).unwrap_err().to_string(),
            "cannot be empty"
        );
    }
}
