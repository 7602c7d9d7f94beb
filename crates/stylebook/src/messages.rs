//! Messages sent by the host dialog.
//!
//! Each inbound message is a JSON object tagged by `type`:
//!
//! ```json
//! {"type": "setFamilyAndWeight", "family": "Inter", "weight": "Bold"}
//! {"type": "setVariable", "variableId": "V:1", "styleId": "S:1", "propertyType": "fontSize"}
//! {"type": "setVariableForSelected", "variableId": "V:1", "propertyType": "lineHeight"}
//! {"type": "setShowTypoGroup", "data": {"Heading": false}}
//! {"type": "setShowDuplicateTypoGroup", "data": {"Inter Regular 16/24px": true}}
//! {"type": "close"}
//! ```
//!
//! [`StyleManager::handle_message`](crate::StyleManager::handle_message)
//! dispatches each one to the matching engine operation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MessageError;
use crate::model::VariableField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DialogMessage {
    /// Sets family and style on every selected entry. `weight` is the
    /// style name.
    SetFamilyAndWeight { family: String, weight: String },
    /// Binds a variable on one entry.
    #[serde(rename_all = "camelCase")]
    SetVariable {
        variable_id: String,
        style_id: String,
        property_type: VariableField,
    },
    /// Binds a variable on every selected entry.
    #[serde(rename_all = "camelCase")]
    SetVariableForSelected {
        variable_id: String,
        property_type: VariableField,
    },
    /// Replaces the group visibility flags.
    SetShowTypoGroup { data: BTreeMap<String, bool> },
    /// Replaces the duplicate-set visibility flags.
    SetShowDuplicateTypoGroup { data: BTreeMap<String, bool> },
    Close,
}

impl DialogMessage {
    /// Decodes one message.
    pub fn from_json(json: &str) -> Result<Self, MessageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            DialogMessage::SetFamilyAndWeight { .. } => "setFamilyAndWeight",
            DialogMessage::SetVariable { .. } => "setVariable",
            DialogMessage::SetVariableForSelected { .. } => "setVariableForSelected",
            DialogMessage::SetShowTypoGroup { .. } => "setShowTypoGroup",
            DialogMessage::SetShowDuplicateTypoGroup { .. } => "setShowDuplicateTypoGroup",
            DialogMessage::Close => "close",
        }
    }
}

/// What handling a message did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Cache entries were edited.
    Edited { touched: usize },
    /// Display flags changed; the edit engine is untouched.
    VisibilityChanged,
    /// The dialog closed.
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_each_kind() {
        let msg = DialogMessage::from_json(
            r#"{"type":"setFamilyAndWeight","family":"Inter","weight":"Bold"}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            DialogMessage::SetFamilyAndWeight {
                family: "Inter".into(),
                weight: "Bold".into()
            }
        );

        let msg = DialogMessage::from_json(
            r#"{"type":"setVariable","variableId":"V:1","styleId":"S:1","propertyType":"fontSize"}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            DialogMessage::SetVariable {
                variable_id: "V:1".into(),
                style_id: "S:1".into(),
                property_type: VariableField::FontSize
            }
        );

        let msg = DialogMessage::from_json(
            r#"{"type":"setVariableForSelected","variableId":"V:2","propertyType":"lineHeight"}"#,
        )
        .unwrap();
        assert_eq!(msg.kind(), "setVariableForSelected");

        let msg =
            DialogMessage::from_json(r#"{"type":"setShowTypoGroup","data":{"Heading":false}}"#)
                .unwrap();
        match msg {
            DialogMessage::SetShowTypoGroup { data } => assert_eq!(data.get("Heading"), Some(&false)),
            other => panic!("unexpected {:?}", other),
        }

        assert_eq!(
            DialogMessage::from_json(r#"{"type":"close"}"#).unwrap(),
            DialogMessage::Close
        );
    }

    #[test]
    fn test_encode_uses_tag() {
        let json = serde_json::to_value(DialogMessage::SetVariableForSelected {
            variable_id: "V:1".into(),
            property_type: VariableField::FontFamily,
        })
        .unwrap();
        assert_eq!(json["type"], "setVariableForSelected");
        assert_eq!(json["variableId"], "V:1");
        assert_eq!(json["propertyType"], "fontFamily");
    }

    #[test]
    fn test_malformed_messages() {
        assert!(DialogMessage::from_json("not json").is_err());
        assert!(DialogMessage::from_json(r#"{"type":"explode"}"#).is_err());
        assert!(DialogMessage::from_json(r#"{"type":"setVariable","variableId":"V:1"}"#).is_err());
        assert!(DialogMessage::from_json(
            r#"{"type":"setVariable","variableId":"V","styleId":"S","propertyType":"color"}"#
        )
        .is_err());
    }
}
