use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::recipient::{
    EntityType, IndividualRecipient, LegalEntityRecipient, Recipient,
};
use crate::sender::SenderInfo;

/// Wire shape of a letter request, before the recipient payload has been
/// checked against `entityType`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, rename = "LetterRequest")]
#[serde(rename_all = "camelCase")]
pub struct RawLetterRequest {
    pub entity_type: EntityType,
    pub date: String,
    #[ts(type = "IndividualRecipient | LegalEntityRecipient")]
    pub recipient: serde_json::Value,
}

/// A validated request: the recipient shape always matches its entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLetterRequest", into = "RawLetterRequest")]
pub struct LetterRequest {
    /// `DD.MM.YYYY`, checked when the letter is rendered.
    pub date: String,
    pub recipient: Recipient,
}

impl LetterRequest {
    pub fn entity_type(&self) -> EntityType {
        self.recipient.entity_type()
    }
}

impl TryFrom<RawLetterRequest> for LetterRequest {
    type Error = CoreError;

    fn try_from(raw: RawLetterRequest) -> Result<Self, Self::Error> {
        let mismatch = |e: serde_json::Error| CoreError::RecipientMismatch {
            entity_type: raw.entity_type.to_string(),
            reason: e.to_string(),
        };

        let recipient = match raw.entity_type {
            EntityType::Individual => Recipient::Individual(
                IndividualRecipient::deserialize(&raw.recipient).map_err(mismatch)?,
            ),
            EntityType::LegalEntity => Recipient::LegalEntity(
                LegalEntityRecipient::deserialize(&raw.recipient).map_err(mismatch)?,
            ),
        };

        Ok(LetterRequest {
            date: raw.date,
            recipient,
        })
    }
}

impl From<LetterRequest> for RawLetterRequest {
    fn from(request: LetterRequest) -> Self {
        let entity_type = request.entity_type();
        let recipient = match request.recipient {
            Recipient::Individual(r) => serde_json::to_value(r),
            Recipient::LegalEntity(r) => serde_json::to_value(r),
        }
        .unwrap_or(serde_json::Value::Null);

        RawLetterRequest {
            entity_type,
            date: request.date,
            recipient,
        }
    }
}

/// Request merged with the sender preset; everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterData {
    pub date: String,
    pub recipient: Recipient,
    pub sender: SenderInfo,
}

impl LetterData {
    pub fn merge(request: LetterRequest, sender: SenderInfo) -> Self {
        LetterData {
            date: request.date,
            recipient: request.recipient,
            sender,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        self.recipient.entity_type()
    }
}
