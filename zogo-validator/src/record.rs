use crate::error::{ValidationError, ValidationResult};
use crate::validator::{FieldValidator, Validator};
use std::collections::HashMap;
use zogo_core::{Map, Value};

/// 记录校验器
///
/// 维护 字段名 -> 有序规则列表 的映射，对整条输入记录执行校验。
/// 注册完成后可被任意次数、并发地复用。
///
/// ```
/// use zogo_validator::{validators, MinValue, RuleValidator};
/// use zogo_core::Value;
///
/// let mut rules = RuleValidator::new();
/// rules.add_rule("age", validators![MinValue(18)]);
///
/// let record = Value::object([("age", Value::Int(16))]);
/// assert_eq!(
///     rules.validate_value(&record).unwrap_err().to_string(),
///     "field 'age': must be greater than or equal to 18"
/// );
/// ```
#[derive(Clone, Default)]
pub struct RuleValidator {
    rules: HashMap<String, Vec<Validator>>,
}

impl RuleValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为字段追加规则；已有规则保留，新规则排在其后
    pub fn add_rule(&mut self, field: impl Into<String>, validators: Vec<Validator>) {
        let field = field.into();
        tracing::trace!("Adding {} rule(s) for field '{}'", validators.len(), field);
        self.rules.entry(field).or_default().extend(validators);
    }

    /// [`add_rule`](Self::add_rule) 的链式版本
    pub fn rule(mut self, field: impl Into<String>, validators: Vec<Validator>) -> Self {
        self.add_rule(field, validators);
        self
    }

    /// 已注册的字段名（顺序不确定）
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn rule_count(&self, field: &str) -> usize {
        self.rules.get(field).map_or(0, Vec::len)
    }

    /// 校验整条记录
    ///
    /// 每个注册字段都必须存在；字段的规则按注册顺序执行，首个失败即返回，
    /// 错误信息带上字段名。
    pub fn validate(&self, record: &Map) -> ValidationResult<()> {
        for (field, rules) in &self.rules {
            let Some(value) = record.get(field) else {
                tracing::debug!("Validation failed: field '{}' not found", field);
                return Err(ValidationError::FieldNotFound(field.clone()));
            };

            if let Err(e) = rules.iter().try_for_each(|rule| rule.validate(value)) {
                tracing::debug!("Validation failed for field '{}': {}", field, e);
                return Err(e.in_field(field.as_str()));
            }
        }

        Ok(())
    }

    /// 校验一个无类型值，值必须是映射
    pub fn validate_value(&self, value: &Value) -> ValidationResult<()> {
        let record = value
            .as_object()
            .ok_or(ValidationError::TypeMismatch("must be an object"))?;
        self.validate(record)
    }
}
