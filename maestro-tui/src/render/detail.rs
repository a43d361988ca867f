//! 详情的 Formatted 视图

use maestro_client::{Condition, WorkDetail};

use crate::view::theme::{bold, paint, underline, Palette};

/// 条件状态图标
pub fn condition_icon(status: &str) -> &'static str {
    match status {
        "True" => "✓",
        "False" => "✗",
        _ => "?",
    }
}

/// 渲染 Formatted 视图
pub fn render_detail(detail: Option<&WorkDetail>, palette: &Palette) -> String {
    let Some(detail) = detail else {
        return paint(palette.muted, "(no detail available)");
    };

    let mut lines = vec![
        kv("Name:", &detail.name, palette),
        kv("Consumer:", &detail.consumer_name, palette),
        kv("Version:", &detail.version.to_string(), palette),
        kv("Created:", &detail.created_at, palette),
        kv("Updated:", &detail.updated_at, palette),
        String::new(),
        header("Conditions:", palette),
    ];

    if detail.conditions.is_empty() {
        lines.push(format!("  {}", paint(palette.muted, "(none)")));
    } else {
        for condition in &detail.conditions {
            push_condition(&mut lines, condition, "  ", palette);
        }
    }

    lines.push(String::new());
    lines.push(header(&format!("Manifests ({}):", detail.manifests.len()), palette));
    for manifest in &detail.manifests {
        let scope = manifest.namespace.as_deref().unwrap_or("(cluster)");
        lines.push(format!(
            "  • {}/{} {}",
            manifest.kind,
            manifest.name,
            paint(palette.muted, &format!("({scope})"))
        ));
    }

    if !detail.resource_status.is_empty() {
        lines.push(String::new());
        lines.push(header("Resource Status:", palette));
        for resource in &detail.resource_status {
            let kind = if resource.kind.is_empty() {
                "Unknown"
            } else {
                resource.kind.as_str()
            };
            lines.push(format!("  {kind}/{}:", resource.name));
            for condition in &resource.conditions {
                push_condition(&mut lines, condition, "    ", palette);
            }
        }
    }

    lines.join("\n")
}

/// 键名左对齐到 12 列
fn kv(label: &str, value: &str, palette: &Palette) -> String {
    format!("{}{value}", paint(palette.muted, &bold(&format!("{label:<12}"))))
}

fn header(text: &str, palette: &Palette) -> String {
    paint(palette.secondary, &bold(&underline(text)))
}

fn push_condition(lines: &mut Vec<String>, condition: &Condition, indent: &str, palette: &Palette) {
    let color = match condition.status.as_str() {
        "True" => palette.success,
        "False" => palette.error,
        _ => palette.warning,
    };
    let mut line = format!(
        "{indent}{} {}",
        paint(color, condition_icon(&condition.status)),
        condition.condition_type
    );
    if !condition.reason.is_empty() {
        line.push_str(&paint(palette.muted, &format!(" ({})", condition.reason)));
    }
    lines.push(line);

    if !condition.message.is_empty() {
        lines.push(format!("{indent}  {}", paint(palette.muted, &condition.message)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ansi::strip_ansi;
    use maestro_client::{ManifestRef, ResourceStatus};
    use pretty_assertions::assert_eq;

    fn cond(t: &str, status: &str, message: &str) -> Condition {
        Condition {
            condition_type: t.to_string(),
            status: status.to_string(),
            message: message.to_string(),
            ..Condition::default()
        }
    }

    fn detail() -> WorkDetail {
        WorkDetail {
            id: "b1".to_string(),
            name: "pi-job".to_string(),
            consumer_name: "agent1".to_string(),
            version: 2,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-02T00:00:00Z".to_string(),
            conditions: vec![cond("Applied", "True", "applied ok"), cond("Available", "False", "")],
            manifests: vec![
                ManifestRef {
                    kind: "Job".to_string(),
                    name: "pi".to_string(),
                    namespace: Some("default".to_string()),
                },
                ManifestRef {
                    kind: "ClusterRole".to_string(),
                    name: "reader".to_string(),
                    namespace: None,
                },
            ],
            resource_status: vec![ResourceStatus {
                kind: String::new(),
                name: "pi".to_string(),
                namespace: None,
                conditions: vec![cond("Complete", "Unknown", "")],
            }],
            raw: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_formatted_plain_layout() {
        let text = strip_ansi(&render_detail(Some(&detail()), &Palette::default()));
        let expected = "\
Name:       pi-job
Consumer:   agent1
Version:    2
Created:    2025-01-01T00:00:00Z
Updated:    2025-01-02T00:00:00Z

Conditions:
  ✓ Applied
    applied ok
  ✗ Available

Manifests (2):
  • Job/pi (default)
  • ClusterRole/reader (cluster)

Resource Status:
  Unknown/pi:
    ? Complete";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_missing_detail() {
        let text = strip_ansi(&render_detail(None, &Palette::default()));
        assert_eq!(text, "(no detail available)");
    }
}
