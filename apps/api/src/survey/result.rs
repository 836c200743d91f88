//! Typed view of the analysis reply requested by the prompt contract.
//!
//! `decode` never enforces this shape. Handlers use [`check_analysis`] only to
//! log a warning when a reply drifts from the contract; the raw value is what
//! gets returned to clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The six stat tokens, in the order the prompt defines them.
pub const STAT_NAMES: [&str; 6] = ["질서", "자유", "성과", "평등", "공동체", "개인"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rationale {
    #[serde(rename = "문항")]
    pub question_ref: String,
    #[serde(rename = "선택")]
    pub choice: String,
    #[serde(rename = "설명")]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoicePair {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedQuestion {
    #[serde(rename = "질문")]
    pub question: String,
    #[serde(rename = "선택지")]
    pub options: ChoicePair,
    #[serde(rename = "구분하려는_스탯")]
    pub target_stats: Vec<String>,
    #[serde(rename = "의도")]
    pub intent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "최종_라벨")]
    pub label: String,
    #[serde(rename = "신뢰도")]
    pub confidence: i64,
    #[serde(rename = "스탯")]
    pub stats: BTreeMap<String, i64>,
    #[serde(rename = "근거")]
    pub rationale: Vec<Rationale>,
    #[serde(rename = "요약")]
    pub summary: String,
    #[serde(rename = "추천_추가질문", default)]
    pub suggested_questions: Vec<SuggestedQuestion>,
}

/// Reads `value` as an [`AnalysisResult`] and checks value ranges.
///
/// Returns the list of contract violations; an empty list means the reply
/// conforms.
pub fn check_analysis(value: &Value) -> Vec<String> {
    let result = match AnalysisResult::deserialize(value) {
        Ok(result) => result,
        Err(e) => return vec![format!("shape mismatch: {e}")],
    };

    let mut issues = Vec::new();

    if !(0..=100).contains(&result.confidence) {
        issues.push(format!("신뢰도 out of range: {}", result.confidence));
    }

    for name in STAT_NAMES {
        match result.stats.get(name) {
            Some(v) if !(0..=100).contains(v) => {
                issues.push(format!("스탯.{name} out of range: {v}"));
            }
            Some(_) => {}
            None => issues.push(format!("스탯.{name} missing")),
        }
    }

    for key in result.stats.keys() {
        if !STAT_NAMES.contains(&key.as_str()) {
            issues.push(format!("unknown stat: {key}"));
        }
    }

    for (i, r) in result.rationale.iter().enumerate() {
        if r.choice != "A" && r.choice != "B" {
            issues.push(format!("근거[{i}].선택 must be A or B, got {:?}", r.choice));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conforming() -> Value {
        json!({
            "최종_라벨": "혼합형",
            "신뢰도": 55,
            "스탯": {"질서": 60, "자유": 40, "성과": 55, "평등": 45, "공동체": 50, "개인": 50},
            "근거": [{"문항": "Q1", "선택": "A", "설명": "추정"}],
            "요약": "요약",
            "추천_추가질문": [{
                "질문": "질문",
                "선택지": {"A": "가", "B": "나"},
                "구분하려는_스탯": ["질서", "자유"],
                "의도": "의도"
            }]
        })
    }

    #[test]
    fn test_conforming_reply_has_no_issues() {
        assert!(check_analysis(&conforming()).is_empty());
    }

    #[test]
    fn test_conforming_reply_deserializes() {
        let r = AnalysisResult::deserialize(&conforming()).unwrap();
        assert_eq!(r.label, "혼합형");
        assert_eq!(r.stats["공동체"], 50);
        assert_eq!(r.suggested_questions[0].options.b, "나");
        assert_eq!(r.suggested_questions[0].target_stats, vec!["질서", "자유"]);
    }

    #[test]
    fn test_suggested_questions_are_optional() {
        let mut v = conforming();
        v.as_object_mut().unwrap().remove("추천_추가질문");
        assert!(check_analysis(&v).is_empty());
    }

    #[test]
    fn test_wrong_shape_reports_mismatch() {
        let issues = check_analysis(&json!({"unexpected": "shape"}));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].starts_with("shape mismatch"));
    }

    #[test]
    fn test_out_of_range_and_missing_stats() {
        let mut v = conforming();
        v["신뢰도"] = json!(120);
        v["스탯"] = json!({"질서": -1, "자유": 40, "성과": 55, "평등": 45, "공동체": 50, "용기": 10});
        v["근거"][0]["선택"] = json!("C");
        let issues = check_analysis(&v);
        assert!(issues.iter().any(|i| i.contains("신뢰도 out of range")));
        assert!(issues.iter().any(|i| i.contains("스탯.질서 out of range")));
        assert!(issues.iter().any(|i| i == "스탯.개인 missing"));
        assert!(issues.iter().any(|i| i == "unknown stat: 용기"));
        assert!(issues.iter().any(|i| i.contains("근거[0].선택")));
    }
}
