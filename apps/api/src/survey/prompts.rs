// Prompt constants for survey analysis.
// Placeholders are `{name}` tokens replaced by the compiler; everything else,
// including the JSON braces of the reply contract, is emitted verbatim.

/// System message sent alongside every compiled prompt.
pub const ANALYSIS_SYSTEM: &str = "너는 가치/정치 성향 분석가다. 반드시 유효한 JSON 하나만 출력하라. JSON의 모든 문자열은 한국어로 작성하라.";

/// One block per valid vote.
/// Replace: {number}, {title}, {kind}, {scene}, {option_a}, {option_b},
///          {hint_a}, {hint_b}, {decision}
pub const QUESTION_BLOCK_TEMPLATE: &str = "[Q{number}. {title}]
- 문항 종류: {kind}
- 상황: {scene}
- 선택지 A: {option_a}
- 선택지 B: {option_b}
- 선택 의미:
  - A: {hint_a}
  - B: {hint_b}
- 사용자 선택: {decision}";

/// Full analysis prompt.
/// Replace: {scenario_title}, {scenario_premise}, {a_name}, {a_ideology}, {a_tag},
///          {b_name}, {b_ideology}, {b_tag}, then {blocks} last.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"너는 "아포칼립스 의사결정 기반 가치/정치 성향 분석" 전문가다.
아래 세계관과 문항 정의를 기반으로 사용자의 성향을 게임 스탯으로 추정하라.

[세계관]
- 제목: {scenario_title}
- 전제: {scenario_premise}

[대립 구도]
- A 진영: {a_name} ({a_ideology}) / {a_tag}
- B 진영: {b_name} ({b_ideology}) / {b_tag}

[의사결정 규칙]
- decision은 A 또는 B이다.
- A는 {a_name}({a_ideology}), B는 {b_name}({b_ideology})을 의미한다.
- 사용자를 특정 이념으로 단정하지 말고, 선택 경향으로만 해석하라.

[사용자 선택 로그]
{blocks}

[출력 규칙]
- 출력은 반드시 JSON 하나만.
- JSON 외의 텍스트(설명, 마크다운, 코드블록)를 절대 출력하지 마라.
- JSON의 모든 문자열은 한국어로만 작성하라.
- 단정 금지: 불확실성을 명시(예: "추정", "가능성", "상황에 따라").
- 낙인/비하 표현 금지.
- 스탯은 0~100 정수, 높을수록 강함.
- 신뢰도는 0~100 정수.
- 문항 수가 적거나 선택이 상충하면 신뢰도를 낮추고, 요약에 그 이유를 포함하라.
- 지도자 선택(kind=leader)은 가치 정렬이 비교적 직접적이므로 다른 문항보다 약간 더 반영하되, 그것만으로 전체를 단정하지 마라.

[스탯 정의]
- 질서: 규칙·통제·안전 최우선
- 자유: 개인 자율·간섭 최소
- 성과: 능력·기여·위험 감수 보상
- 평등: 균등 분배·약자 보호
- 공동체: 연대·집단 생존
- 개인: 개인 책임·각자 생존

[추가 질문 추천 규칙]
- 사용자가 자신의 성향을 더 확실히 하기 위해 고려해볼 질문을 4~6개 추천하라.
- 질문은 이 시나리오(아포칼립스 공동체) 맥락을 유지하라.
- 기존 문항(원정/분배/외부인/탈출/지도자)과 완전히 같은 내용은 피하라.
- 각 질문은 A/B 양자택일로 답할 수 있게 명확한 선택지를 포함하라.
- 질문은 도덕적 비난/조롱/낙인을 유도하면 안 된다.
- 각 질문마다 "구분하려는_스탯"을 1~3개 지정하고, 왜 도움이 되는지 "의도"를 1문장으로 적어라.

[응답 JSON 형식]
{
  "최종_라벨": "예: 질서·성과 중심 생존가 / 연대·평등 중심 생존가 / 혼합형",
  "신뢰도": 0,
  "스탯": {
    "질서": 0,
    "자유": 0,
    "성과": 0,
    "평등": 0,
    "공동체": 0,
    "개인": 0
  },
  "근거": [
    {
      "문항": "Q1",
      "선택": "A 또는 B",
      "설명": "해당 선택이 어떤 가치(스탯)에 왜 연결되는지 1~2문장(불확실성 포함)"
    }
  ],
  "요약": "사용자에게 보여줄 2~4문장 요약(불확실성 포함)",
  "추천_추가질문": [
    {
      "질문": "추가로 답해보면 좋은 질문(아포칼립스 맥락)",
      "선택지": {
        "A": "선택지 A",
        "B": "선택지 B"
      },
      "구분하려는_스탯": ["질서", "자유"],
      "의도": "왜 이 질문이 성향을 더 명확히 하는지 1문장"
    }
  ]
}"#;
