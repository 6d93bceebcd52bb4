//! 分類ラベル → 症状説明・推奨対応の固定テーブル

use serde::Serialize;

/// ラベルごとの説明と推奨対応
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiseaseInfo {
    pub label: &'static str,
    pub description: &'static str,
    pub care: &'static str,
}

/// 予測サービスが返す4ラベル
pub const DISEASE_INFO: &[DiseaseInfo] = &[
    DiseaseInfo {
        label: "diseased cotton leaf",
        description: "The cotton leaf shows signs of disease, which may affect the plant's ability to photosynthesize effectively. Common symptoms include spots, discoloration, or abnormal growth patterns.",
        care: "Immediately isolate affected plants. Consider applying appropriate fungicides or pesticides after identifying the specific disease. Monitor surrounding plants for similar symptoms.",
    },
    DiseaseInfo {
        label: "diseased cotton plant",
        description: "The entire cotton plant exhibits disease symptoms, which could indicate a systemic infection affecting multiple parts of the plant including stems, leaves, and possibly bolls.",
        care: "Remove severely affected plants to prevent disease spread. Implement proper field sanitation. Consider crop rotation for the next season. Consult with agricultural experts for disease-specific treatment.",
    },
    DiseaseInfo {
        label: "fresh cotton leaf",
        description: "The cotton leaf appears healthy with normal coloration and growth patterns. Healthy leaves are essential for proper photosynthesis and cotton development.",
        care: "Maintain regular irrigation schedule. Continue balanced fertilization program. Monitor regularly for early signs of pest infestation or disease.",
    },
    DiseaseInfo {
        label: "fresh cotton plant",
        description: "The cotton plant shows signs of good health with proper growth and development. Healthy plants typically produce better yield and fiber quality.",
        care: "Continue current management practices. Ensure adequate spacing between plants. Monitor soil moisture levels and maintain optimal growing conditions.",
    },
];

impl DiseaseInfo {
    /// 完全一致で検索（大文字小文字の違いも別ラベル扱い）
    pub fn lookup(label: &str) -> Option<&'static DiseaseInfo> {
        DISEASE_INFO.iter().find(|info| info.label == label)
    }
}

/// 既知ラベル一覧（テーブル順）
pub fn known_labels() -> impl Iterator<Item = &'static str> {
    DISEASE_INFO.iter().map(|info| info.label)
}
