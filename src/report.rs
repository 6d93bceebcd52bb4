//! 判定結果のターミナル表示

use cotton_common::{ResultView, Severity, DISEASE_INFO};
use serde::Serialize;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

fn status_icon(view: &ResultView) -> &'static str {
    if !view.known {
        "❔"
    } else if view.is_diseased {
        "⚠️"
    } else {
        "🌿"
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "🟢",
        Severity::Warning => "🟡",
        Severity::Danger => "🔴",
    }
}

/// 信頼度バー（0-100%の範囲外は端に寄せて描画のみ行う）
pub fn confidence_bar(percent: f64) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// 判定結果カード
pub fn format_result(view: &ResultView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} Analysis Result: {}", status_icon(view), view.title());
    if !view.known {
        let _ = writeln!(out, "   (returned label: {:?})", view.label);
    }
    let _ = writeln!(
        out,
        "{} {} Confidence ({})",
        severity_icon(view.severity),
        view.confidence_percent_text,
        view.tier
    );
    let _ = writeln!(
        out,
        "   {} {}",
        confidence_bar(view.confidence_percent),
        view.confidence_percent_text
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Condition Details");
    let _ = writeln!(out, "  {}", view.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommended Actions");
    let _ = writeln!(out, "  {}", view.care);
    out
}

/// フォルダ判定の1件分
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEntry {
    pub file_name: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn format_scan_line(entry: &ScanEntry) -> String {
    match (&entry.result, &entry.error) {
        (Some(view), _) => format!(
            "  {} {:<32} {:<24} {:>7}",
            status_icon(view),
            entry.file_name,
            view.title(),
            view.confidence_percent_text
        ),
        (None, Some(error)) => format!("  ❌ {:<32} {}", entry.file_name, error),
        (None, None) => format!("  ❔ {}", entry.file_name),
    }
}

pub fn format_scan_summary(entries: &[ScanEntry]) -> String {
    let failed = entries.iter().filter(|e| e.result.is_none()).count();
    let diseased = entries
        .iter()
        .filter_map(|e| e.result.as_ref())
        .filter(|v| v.is_diseased)
        .count();
    let healthy = entries.len() - failed - diseased;
    format!(
        "Total: {} | 🌿 Healthy: {} | ⚠️ Diseased: {} | ❌ Failed: {}",
        entries.len(),
        healthy,
        diseased,
        failed
    )
}

pub fn format_labels() -> String {
    let mut out = String::from("Model can identify:\n");
    for info in DISEASE_INFO {
        let _ = writeln!(out, "\n● {}", info.label);
        let _ = writeln!(out, "  {}", info.description);
        let _ = writeln!(out, "  → {}", info.care);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cotton_common::{render, PredictionResult};

    #[test]
    fn test_confidence_bar() {
        assert_eq!(confidence_bar(0.0), format!("[{}]", "░".repeat(BAR_WIDTH)));
        assert_eq!(confidence_bar(100.0), format!("[{}]", "█".repeat(BAR_WIDTH)));
        assert_eq!(confidence_bar(150.0), confidence_bar(100.0));
        assert_eq!(confidence_bar(-5.0), confidence_bar(0.0));
    }

    #[test]
    fn test_format_result_known() {
        let view = render(&PredictionResult::new("diseased cotton leaf", 0.65));
        let text = format_result(&view);
        assert!(text.contains("Analysis Result: diseased cotton leaf"));
        assert!(text.contains("65.0% Confidence (medium)"));
        assert!(text.contains(&view.description));
        assert!(text.contains(&view.care));
        assert!(!text.contains("returned label"));
    }

    #[test]
    fn test_format_result_unknown() {
        let view = render(&PredictionResult::new("cotton boll", 0.3));
        let text = format_result(&view);
        assert!(text.contains("Unknown classification"));
        assert!(text.contains("\"cotton boll\""));
    }

    #[test]
    fn test_scan_summary() {
        let entries = vec![
            ScanEntry {
                file_name: "a.png".into(),
                file_path: "a.png".into(),
                result: Some(render(&PredictionResult::new("fresh cotton leaf", 0.9))),
                error: None,
            },
            ScanEntry {
                file_name: "b.png".into(),
                file_path: "b.png".into(),
                result: Some(render(&PredictionResult::new("diseased cotton plant", 0.9))),
                error: None,
            },
            ScanEntry {
                file_name: "c.png".into(),
                file_path: "c.png".into(),
                result: None,
                error: Some("Failed to process image. Please try again.".into()),
            },
        ];
        assert_eq!(
            format_scan_summary(&entries),
            "Total: 3 | 🌿 Healthy: 1 | ⚠️ Diseased: 1 | ❌ Failed: 1"
        );
    }

    #[test]
    fn test_format_labels_lists_all() {
        let text = format_labels();
        for info in DISEASE_INFO {
            assert!(text.contains(info.label));
        }
    }
}
