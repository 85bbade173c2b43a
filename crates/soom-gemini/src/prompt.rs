//! Prompt construction. Pure string building; nothing here can fail.

use soom_core::models::intake::PatientIntake;
use soom_core::vocab::{COVERED_ITEMS, Classification, TreatmentDuration, UNCOVERED_ITEMS};

const SUMMARY_HEADER: &str = "환자 문진 요약(진단/처방 금지, 입력 재정리):";

const SUMMARY_RULES: &str = "\
위 문진 내용을 읽기 쉬운 문장으로 재정리하라. \
진단명, 처방, 치료 권고 등 진단적·처방적 표현은 절대 쓰지 말고 \
입력된 사실만 정리하라.";

const ASSISTANT_ROLE: &str = "\
너는 숨쉬는한의원 내부 상담 보조 도구다.
아래 환자 문진을 바탕으로 JSON만 출력하라(추가 텍스트 금지).";

const EXAMPLE_JSON: &str = r#"{
  "classification": "만성",
  "duration": "4주",
  "covered": ["체질침","전침"],
  "uncovered": ["약침"],
  "rationale": "증상 기간 및 병력 고려",
  "objective_comment": "수면·스트레스 관리 병행 권장",
  "caution": "특이사항 없음",
  "extra_suggestions": []
}"#;

/// Prompt asking the service to restate the intake as readable prose.
pub fn summary_prompt(intake: &PatientIntake) -> String {
    let mut prompt = String::from(SUMMARY_HEADER);
    for line in intake.display_lines() {
        prompt.push('\n');
        prompt.push_str(&line);
    }
    prompt.push_str("\n\n");
    prompt.push_str(SUMMARY_RULES);
    prompt
}

/// Prompt asking the service for a JSON treatment suggestion constrained to
/// the fixed vocabularies.
pub fn suggestion_prompt(intake: &PatientIntake) -> String {
    let classifications = quoted_alternatives(Classification::ALL.iter().map(|c| c.label()));
    let durations = quoted_alternatives(TreatmentDuration::ALL.iter().map(|d| d.label()));
    let covered = quoted_list(COVERED_ITEMS.iter().copied());
    let uncovered = quoted_list(UNCOVERED_ITEMS.iter().copied());

    let mut prompt = format!(
        "{ASSISTANT_ROLE}

필수 필드:
- classification: {classifications}
- duration: {durations}
- covered: 다음 목록에서만 선택 {covered}
- uncovered: 다음 목록에서만 선택 {uncovered}
- rationale: 권장 근거
- objective_comment: 생활습관/재발예방 코멘트
- caution: 병용 주의사항. 절대 빈 값으로 두지 말 것 (없으면 \"특이사항 없음\")
- extra_suggestions: 위 목록에 없는 치료 아이디어는 covered/uncovered에 넣지 말고 이 배열에만 넣을 것

JSON 예시:
{EXAMPLE_JSON}

[환자 문진]"
    );
    for line in intake.display_lines() {
        prompt.push('\n');
        prompt.push_str(&line);
    }
    prompt
}

fn quoted_alternatives<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels
        .map(|l| format!("\"{l}\""))
        .collect::<Vec<_>>()
        .join("|")
}

fn quoted_list<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = labels.map(|l| format!("\"{l}\"")).collect();
    format!("[{}]", quoted.join(","))
}
