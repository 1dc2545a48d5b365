use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Individual,
    LegalEntity,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Individual => "individual",
            EntityType::LegalEntity => "legal_entity",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct IndividualRecipient {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LegalEntityRecipient {
    pub company_name: String,
}

/// Who the letter is addressed to. The variant is chosen by the request's
/// `entityType` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    Individual(IndividualRecipient),
    LegalEntity(LegalEntityRecipient),
}

impl Recipient {
    pub fn entity_type(&self) -> EntityType {
        match self {
            Recipient::Individual(_) => EntityType::Individual,
            Recipient::LegalEntity(_) => EntityType::LegalEntity,
        }
    }
}
