//! Fixed vocabularies shared by the intake form, the prompts, the allow-list
//! filter and the staff selection.
//!
//! Labels are reproduced verbatim; stored or compared output depends on the
//! exact strings, so none of these lists may be extended at runtime.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Insurance-covered treatment items (급여).
pub const COVERED_ITEMS: [&str; 9] = [
    "전침",
    "통증침",
    "체질침",
    "건부항",
    "습부항",
    "전자뜸",
    "핫팩",
    "ICT",
    "보험한약",
];

/// Non-covered treatment items (비급여).
pub const UNCOVERED_ITEMS: [&str; 4] = ["약침", "약침패치", "테이핑요법", CUSTOM_HERBAL];

/// The custom (non-covered) herbal formula. A staff-selected compounding
/// duration is folded into this entry instead of being listed separately.
pub const CUSTOM_HERBAL: &str = "비급여 맞춤 한약";

/// Symptom checklist shown on the intake form.
pub const SYMPTOMS: [&str; 24] = [
    "머리",
    "허리",
    "어깨",
    "발/목/뒤꿈치",
    "무릎",
    "손목",
    "허벅지",
    "뒷목 어깻죽지",
    "등",
    "손",
    "손가락",
    "엉덩이/골반",
    "팔꿈치",
    "장단지",
    "손/팔 저림",
    "두통/어지러움",
    "설사",
    "생리통",
    "다리 감각 이상",
    "변비",
    "소화불량",
    "불안 장애",
    "불면",
    "알레르지질환",
];

/// Cause checklist shown on the intake form.
pub const CAUSES: [&str; 9] = [
    "사고(운동)",
    "사고(교통사고)",
    "사고(상해)",
    "사고(일상생활)",
    "음식",
    "스트레스",
    "원인모름",
    "기존질환",
    "생활습관 및 환경",
];

pub fn is_covered_item(item: &str) -> bool {
    COVERED_ITEMS.contains(&item)
}

pub fn is_uncovered_item(item: &str) -> bool {
    UNCOVERED_ITEMS.contains(&item)
}

/// Disease classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Classification {
    #[serde(rename = "급성", alias = "급성질환")]
    Acute,
    #[serde(rename = "만성", alias = "만성질환")]
    Chronic,
    #[serde(rename = "웰니스")]
    Wellness,
}

impl Classification {
    pub const ALL: [Classification; 3] = [Self::Acute, Self::Chronic, Self::Wellness];

    pub fn label(self) -> &'static str {
        match self {
            Self::Acute => "급성",
            Self::Chronic => "만성",
            Self::Wellness => "웰니스",
        }
    }

    /// Parse a label, accepting the long form used on the staff form
    /// (`급성질환`, `만성질환`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "급성" | "급성질환" => Some(Self::Acute),
            "만성" | "만성질환" => Some(Self::Chronic),
            "웰니스" => Some(Self::Wellness),
            _ => None,
        }
    }
}

/// Treatment duration bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TreatmentDuration {
    #[serde(rename = "1주")]
    OneWeek,
    #[serde(rename = "2주")]
    TwoWeeks,
    #[serde(rename = "3주")]
    ThreeWeeks,
    #[serde(rename = "4주")]
    FourWeeks,
    #[serde(rename = "1개월 이상")]
    OneMonthOrMore,
}

impl TreatmentDuration {
    pub const ALL: [TreatmentDuration; 5] = [
        Self::OneWeek,
        Self::TwoWeeks,
        Self::ThreeWeeks,
        Self::FourWeeks,
        Self::OneMonthOrMore,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::OneWeek => "1주",
            Self::TwoWeeks => "2주",
            Self::ThreeWeeks => "3주",
            Self::FourWeeks => "4주",
            Self::OneMonthOrMore => "1개월 이상",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

/// When the symptoms started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OnsetCategory {
    #[serde(rename = "일주일 이내")]
    WithinOneWeek,
    #[serde(rename = "1주~1개월")]
    OneWeekToOneMonth,
    #[serde(rename = "1개월~3개월")]
    OneToThreeMonths,
    #[serde(rename = "3개월 이상")]
    OverThreeMonths,
}

impl OnsetCategory {
    pub const ALL: [OnsetCategory; 4] = [
        Self::WithinOneWeek,
        Self::OneWeekToOneMonth,
        Self::OneToThreeMonths,
        Self::OverThreeMonths,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::WithinOneWeek => "일주일 이내",
            Self::OneWeekToOneMonth => "1주~1개월",
            Self::OneToThreeMonths => "1개월~3개월",
            Self::OverThreeMonths => "3개월 이상",
        }
    }
}

/// How often the patient expects to visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VisitFrequency {
    #[serde(rename = "매일 통원")]
    Daily,
    #[serde(rename = "주 3~6회")]
    ThreeToSixPerWeek,
    #[serde(rename = "주 1~2회")]
    OnceOrTwicePerWeek,
    #[serde(rename = "기타")]
    Other,
}

impl VisitFrequency {
    pub const ALL: [VisitFrequency; 4] = [
        Self::Daily,
        Self::ThreeToSixPerWeek,
        Self::OnceOrTwicePerWeek,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "매일 통원",
            Self::ThreeToSixPerWeek => "주 3~6회",
            Self::OnceOrTwicePerWeek => "주 1~2회",
            Self::Other => "기타",
        }
    }
}

/// Every fixed list, as served to a form front-end.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Vocabulary {
    pub covered_items: Vec<String>,
    pub uncovered_items: Vec<String>,
    pub classifications: Vec<String>,
    pub durations: Vec<String>,
    pub onset_categories: Vec<String>,
    pub visit_frequencies: Vec<String>,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
}

impl Vocabulary {
    pub fn fixed() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            covered_items: owned(&COVERED_ITEMS),
            uncovered_items: owned(&UNCOVERED_ITEMS),
            classifications: Classification::ALL.iter().map(|c| c.label().to_string()).collect(),
            durations: TreatmentDuration::ALL.iter().map(|d| d.label().to_string()).collect(),
            onset_categories: OnsetCategory::ALL.iter().map(|o| o.label().to_string()).collect(),
            visit_frequencies: VisitFrequency::ALL.iter().map(|v| v.label().to_string()).collect(),
            symptoms: owned(&SYMPTOMS),
            causes: owned(&CAUSES),
        }
    }
}
