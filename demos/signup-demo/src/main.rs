use anyhow::{Context, Result};
use zogo_core::prelude::*;
use zogo_validator::prelude::*;

// ==================== 注册表单规则 ====================

fn signup_rules() -> RuleValidator {
    let address = ObjectSchema::default()
        .field("city", NotEmpty)
        .field("zip", StringSchema);

    RuleValidator::new()
        .rule("email", validators![email_min_max_length(5, 40)])
        .rule(
            "username",
            validators![StringValidator::builder().non_empty().min(3).max(16).build()],
        )
        .rule("age", validators![min_value(18)])
        .rule("newsletter", validators![BooleanSchema])
        .rule("address", validators![address])
}

const SAMPLES: &[&str] = &[
    r#"{"email": "ann@example.com", "username": "ann", "age": 30, "newsletter": true,
        "address": {"city": "Oslo", "zip": null}}"#,
    r#"{"email": "ann@example.com", "username": "ann", "age": 16, "newsletter": null,
        "address": {"city": "Oslo", "zip": "0150"}}"#,
    r#"{"email": "a@b.c", "username": "ann", "age": 30, "newsletter": false,
        "address": {"city": "Oslo", "zip": "0150"}}"#,
    r#"{"username": "ann", "age": 30, "newsletter": false, "address": {}}"#,
];

// ==================== 入口 ====================

fn main() -> Result<()> {
    LoggingConfig::from_env()
        .init()
        .context("Failed to set up logging")?;

    let rules = signup_rules();

    // 有参数时把每个参数当作 JSON 文件路径，否则使用内置样例
    let payloads: Vec<(String, String)> = match std::env::args().skip(1).collect::<Vec<_>>() {
        paths if !paths.is_empty() => paths
            .into_iter()
            .map(|path| {
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read '{}'", path))
                    .map(|body| (path, body))
            })
            .collect::<Result<_>>()?,
        _ => SAMPLES
            .iter()
            .enumerate()
            .map(|(i, body)| (format!("sample #{}", i + 1), body.to_string()))
            .collect(),
    };

    let mut rejected = 0;
    for (name, body) in &payloads {
        let input = Value::from_json_str(body)
            .with_context(|| format!("Payload {} is not valid JSON", name))?;

        match rules.validate_value(&input) {
            Ok(()) => tracing::info!("{}: accepted", name),
            Err(e) => {
                rejected += 1;
                tracing::warn!("{}: rejected ({})", name, e);
            }
        }
    }

    tracing::info!("{} of {} payload(s) rejected", rejected, payloads.len());
    Ok(())
}
