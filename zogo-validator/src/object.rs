use crate::error::{ValidationError, ValidationResult};
use crate::validator::{FieldValidator, Validator};
use std::collections::HashMap;
use zogo_core::Value;

/// 嵌套对象校验器
///
/// 对映射中的每个配置字段执行对应校验器：
/// - 输入不是映射时直接通过，调用方需要自行校验外层类型
/// - 字段缺失返回 `field '<name>' not found`
/// - 字段校验失败时原样返回内层错误，不附加字段名
///
/// 字段的遍历顺序不确定，多个字段同时失败时只保证报告其中一个。
#[derive(Clone, Default)]
pub struct ObjectSchema {
    fields: HashMap<String, Validator>,
}

impl ObjectSchema {
    pub fn new(fields: HashMap<String, Validator>) -> Self {
        Self { fields }
    }

    /// 添加一个必需字段；同名字段会被替换
    pub fn field(mut self, name: impl Into<String>, validator: impl FieldValidator + 'static) -> Self {
        self.fields.insert(name.into(), validator.boxed());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldValidator for ObjectSchema {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let Some(data) = value.as_object() else {
            tracing::trace!("Object schema skipped for non-object value ({})", value.type_name());
            return Ok(());
        };

        for (name, validator) in &self.fields {
            let field_value = data
                .get(name)
                .ok_or_else(|| ValidationError::FieldNotFound(name.clone()))?;
            validator.validate(field_value)?;
        }

        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, Validator)> for ObjectSchema {
    fn from_iter<I: IntoIterator<Item = (K, Validator)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
