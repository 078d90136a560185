use thiserror::Error;

/// 校验错误
///
/// Display 输出即面向调用方的描述性文本，字段上下文通过 [`ValidationError::Field`] 逐层包裹。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// 类型不匹配，例如 "must be a string"
    #[error("{0}")]
    TypeMismatch(&'static str),

    /// 约束不满足，例如 "must have a minimum length of 3"
    #[error("{0}")]
    Constraint(String),

    #[error("field '{0}' not found")]
    FieldNotFound(String),

    #[error("field '{field}': {source}")]
    Field {
        field: String,
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    /// 为错误附加字段名
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// 被归咎的字段名（若有）
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::FieldNotFound(field) | Self::Field { field, .. } => Some(field),
            _ => None,
        }
    }

    /// 最内层的原始错误
    pub fn root(&self) -> &ValidationError {
        match self {
            Self::Field { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.root(), Self::TypeMismatch(_))
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
