//! Question catalog — the fixed scenario and its five decision points.
//!
//! Everything here is `const` data. There is no mutation path; callers only
//! get `&'static` references through [`get`], [`questions`] and [`scenario`].

use std::fmt;

/// How a question is weighted when the model interprets it.
/// `Leader` answers reveal value alignment most directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Route,
    Binary,
    Leader,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Route => "route",
            QuestionKind::Binary => "binary",
            QuestionKind::Leader => "leader",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single decision point. `id` is the identity used by stored votes;
/// `number` is what the prompt shows as `Q{number}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub number: u32,
    pub kind: QuestionKind,
    pub title: &'static str,
    pub scene: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
    pub hint_a: &'static str,
    pub hint_b: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faction {
    pub name: &'static str,
    pub ideology: &'static str,
    pub tag: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub title: &'static str,
    pub premise: &'static str,
    pub faction_a: Faction,
    pub faction_b: Faction,
}

const SCENARIO: Scenario = Scenario {
    title: "크래프톤 빌딩 생존자 15인",
    premise: "2026년 1월 원인 불명 감염 사태로 도시가 붕괴했고, 생존자들이 크래프톤 빌딩 102호에 피신했다. 플레이어는 결정권자로서 공동체의 생존 규칙을 선택한다.",
    faction_a: Faction {
        name: "성열",
        ideology: "보수 성향",
        tag: "능력·성과·질서·안전·고립/리스크 회피",
    },
    faction_b: Faction {
        name: "재면",
        ideology: "진보 성향",
        tag: "제도·평등·연대·수용·집단 이동/공동체",
    },
};

const QUESTIONS: [Question; 5] = [
    Question {
        id: 1,
        number: 1,
        kind: QuestionKind::Route,
        title: "원정대 파견",
        scene: "식량이 바닥나 동측 매점 원정이 필요하다. 특전사 출신 재원을 다시 보낼지, 제도로 순번을 정할지가 쟁점이다.",
        option_a: "[성열] 능력자 재원을 다시 파견한다 (성과 보상/합리성 강조)",
        option_b: "[재면] 제비뽑기·순번제로 파견한다 (제도화된 공정/억울함 최소화)",
        hint_a: "능력·성과 중심, 위험 감수자 보상, 효율 우선",
        hint_b: "제도·절차 중심, 평등한 부담 분배, 공동체 공정",
    },
    Question {
        id: 2,
        number: 2,
        kind: QuestionKind::Binary,
        title: "분배의 자격",
        scene: "원정 결과와 무관하게 식량 분배 방식이 쟁점이다. 기여도 차등 vs N분의1 균등.",
        option_a: "[성열] 기여도/위험 감수자 우선 차등 배급",
        option_b: "[재면] 전원 N분의1 완전 균등 배급",
        hint_a: "성과·기여·책임을 중시(능력주의)",
        hint_b: "평등·약자 보호·연대(분배 정의)",
    },
    Question {
        id: 3,
        number: 3,
        kind: QuestionKind::Binary,
        title: "외부인과 규칙",
        scene: "문밖의 생존자를 받을지 결정한다. 감염 리스크 vs 연대/노동력/규칙 기반 수용.",
        option_a: "[성열] 진입 거부 (안전 최우선, 고립 강화)",
        option_b: "[재면] 격리 규칙 후 수용 (연대/자원 확장, 내부 감염 위험)",
        hint_a: "안전·통제·리스크 회피",
        hint_b: "포용·연대·제도적 관리",
    },
    Question {
        id: 4,
        number: 4,
        kind: QuestionKind::Binary,
        title: "탈출 vs 존버",
        scene: "전기가 끊기고 자원이 줄어든다. 현위치 사수 vs 단체 탈출.",
        option_a: "[성열] 현위치 사수 (리스크 최소, 개인 생존 집중)",
        option_b: "[재면] 단체 탈출 시도 (집단 운명 공동체, 조직적 이동)",
        hint_a: "안정/현상 유지/리스크 최소화",
        hint_b: "집단 행동/연대/변화 감수",
    },
    Question {
        id: 5,
        number: 5,
        kind: QuestionKind::Leader,
        title: "지도자 선택",
        scene: "갈등 이후 새로운 공동체를 이끌 대표를 고른다. 이 선택은 가치 정렬을 직접적으로 드러낸다.",
        option_a: "[성열] 질서·성과·통제 중심 리더",
        option_b: "[재면] 규칙·평등·연대 중심 리더",
        hint_a: "보수적 리더십(질서/통제/성과)",
        hint_b: "진보적 리더십(평등/연대/제도)",
    },
];

/// Looks up a question by its stored id.
pub fn get(id: i64) -> Option<&'static Question> {
    questions().iter().find(|q| q.id == id)
}

/// All questions in catalog order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn scenario() -> &'static Scenario {
    &SCENARIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_five_questions() {
        assert_eq!(questions().len(), 5);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<i64> = questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), questions().len());
    }

    #[test]
    fn test_get_known_id() {
        let q = get(3).unwrap();
        assert_eq!(q.number, 3);
        assert_eq!(q.title, "외부인과 규칙");
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        assert!(get(0).is_none());
        assert!(get(999).is_none());
        assert!(get(-1).is_none());
    }

    #[test]
    fn test_only_last_question_is_leader() {
        let leaders: Vec<i64> = questions()
            .iter()
            .filter(|q| q.kind == QuestionKind::Leader)
            .map(|q| q.id)
            .collect();
        assert_eq!(leaders, vec![5]);
        assert_eq!(get(1).unwrap().kind, QuestionKind::Route);
    }

    #[test]
    fn test_kind_display_matches_prompt_tokens() {
        assert_eq!(QuestionKind::Route.to_string(), "route");
        assert_eq!(QuestionKind::Binary.to_string(), "binary");
        assert_eq!(QuestionKind::Leader.to_string(), "leader");
    }

    #[test]
    fn test_options_are_tagged_with_faction_names() {
        let s = scenario();
        for q in questions() {
            assert!(q.option_a.contains(s.faction_a.name));
            assert!(q.option_b.contains(s.faction_b.name));
        }
    }
}
