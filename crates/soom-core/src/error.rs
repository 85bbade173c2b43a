use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{field} item not in the fixed vocabulary: {item}")]
    NotInVocabulary { field: &'static str, item: String },

    #[error("herb duration {duration} given without 비급여 맞춤 한약 selected")]
    HerbDurationWithoutFormula { duration: String },
}
