use serde_json::{json, Value};

/// Fixed analysis returned by the dev endpoint when `MOCK_ANALYSIS=true`.
pub fn mock_analysis() -> Value {
    json!({
        "최종_라벨": "혼합형(테스트)",
        "신뢰도": 50,
        "스탯": {
            "질서": 60,
            "자유": 40,
            "성과": 55,
            "평등": 45,
            "공동체": 50,
            "개인": 50
        },
        "근거": [
            { "문항": "Q1", "선택": "A", "설명": "테스트용 더미 근거입니다." }
        ],
        "요약": "이 응답은 MOCK_ANALYSIS=true일 때 반환되는 테스트용 결과입니다."
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::result::check_analysis;

    #[test]
    fn test_mock_satisfies_reply_contract() {
        assert!(check_analysis(&mock_analysis()).is_empty());
    }
}
