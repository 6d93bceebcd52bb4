//! 予測結果 → 表示用ビューモデル
//!
//! UIツールキットに依存しない純粋関数のみ。CLIとWebの両方がこの出力を描画する。

use crate::disease_info::DiseaseInfo;
use crate::messages;
use crate::types::PredictionResult;
use serde::Serialize;

/// 信頼度の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

/// 表示色（チップとプログレスバーで共通）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl ConfidenceTier {
    /// 下限はいずれも含む: 0.8以上 High / 0.6以上 Medium / それ未満 Low
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceTier::High
        } else if confidence >= 0.6 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ConfidenceTier::High => Severity::Success,
            ConfidenceTier::Medium => Severity::Warning,
            ConfidenceTier::Low => Severity::Danger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn confidence_tier(confidence: f64) -> ConfidenceTier {
    ConfidenceTier::from_confidence(confidence)
}

/// ラベルに "diseased" を含むか（大文字小文字を区別する部分一致）
pub fn is_diseased(label: &str) -> bool {
    label.contains("diseased")
}

pub fn lookup_info(label: &str) -> Option<&'static DiseaseInfo> {
    DiseaseInfo::lookup(label)
}

/// 描画用ペイロード
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub label: String,
    pub tier: ConfidenceTier,
    pub severity: Severity,
    pub is_diseased: bool,
    /// テーブルに存在するラベルか
    pub known: bool,
    pub description: String,
    pub care: String,
    /// 0-100スケール（クランプしない）
    pub confidence_percent: f64,
    /// 小数1桁 + "%"（例: "92.0%"）
    pub confidence_percent_text: String,
}

impl ResultView {
    /// 見出しに使うラベル
    pub fn title(&self) -> &str {
        if self.known {
            &self.label
        } else {
            messages::UNKNOWN_CLASSIFICATION
        }
    }
}

pub fn render(prediction: &PredictionResult) -> ResultView {
    let tier = confidence_tier(prediction.confidence);
    let confidence_percent = prediction.confidence * 100.0;

    let (known, description, care) = match lookup_info(&prediction.label) {
        Some(info) => (true, info.description, info.care),
        None => (false, messages::UNKNOWN_DESCRIPTION, messages::UNKNOWN_CARE),
    };

    ResultView {
        label: prediction.label.clone(),
        tier,
        severity: tier.severity(),
        is_diseased: is_diseased(&prediction.label),
        known,
        description: description.to_string(),
        care: care.to_string(),
        confidence_percent,
        confidence_percent_text: format!("{}%", to_fixed_1(confidence_percent)),
    }
}

/// 小数1桁に丸める
///
/// ちょうど中間の値は0から遠い方に丸める（`{:.1}` は偶数丸め）。
fn to_fixed_1(value: f64) -> String {
    let scaled = value * 10.0;
    if (scaled - scaled.trunc()).abs() == 0.5 {
        format!("{:.1}", scaled.round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
