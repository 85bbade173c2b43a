use soom_core::models::intake::PatientIntake;
use soom_core::vocab::{COVERED_ITEMS, UNCOVERED_ITEMS, VisitFrequency};
use soom_gemini::prompt::{suggestion_prompt, summary_prompt};

fn intake() -> PatientIntake {
    PatientIntake {
        name: Some("홍길동".to_string()),
        age: Some(35),
        symptoms: vec!["허리".to_string()],
        symptom_other: Some("발목 시큰거림".to_string()),
        visit: Some(VisitFrequency::ThreeToSixPerWeek),
        ..PatientIntake::default()
    }
}

#[test]
fn summary_prompt_forbids_diagnosis_and_lists_fields() {
    let prompt = summary_prompt(&intake());

    assert!(prompt.starts_with("환자 문진 요약(진단/처방 금지"));
    assert!(prompt.contains("- 이름/나이: 홍길동 / 35"));
    assert!(prompt.contains("- 주요 증상: 허리, 발목 시큰거림"));
    assert!(prompt.contains("- 혈압/맥박: -"));
    assert!(prompt.contains("- 내원 빈도: 주 3~6회"));
}

#[test]
fn suggestion_prompt_embeds_every_vocabulary_item() {
    let prompt = suggestion_prompt(&intake());

    for item in COVERED_ITEMS.iter().chain(UNCOVERED_ITEMS.iter()) {
        assert!(prompt.contains(&format!("\"{item}\"")), "missing {item}");
    }
    assert!(prompt.contains("\"급성\"|\"만성\"|\"웰니스\""));
    assert!(prompt.contains("\"1주\"|\"2주\"|\"3주\"|\"4주\"|\"1개월 이상\""));
}

#[test]
fn suggestion_prompt_demands_json_caution_and_extra_field() {
    let prompt = suggestion_prompt(&intake());

    assert!(prompt.contains("JSON만 출력하라"));
    assert!(prompt.contains("절대 빈 값으로 두지 말 것"));
    assert!(prompt.contains("extra_suggestions"));
    assert!(prompt.trim_end().ends_with("- 내원 빈도: 주 3~6회"));
}
