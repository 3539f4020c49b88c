//! JSON output formatting.

use anyhow::Result;
use serde::Serialize;
use steamglance_core::{EntityKind, MediaPlayerAttributes};

/// Entity attributes keyed by entity id.
#[derive(Debug, Serialize)]
pub struct EntityOutput<'a> {
    pub entity_id: &'static str,
    #[serde(flatten)]
    pub attributes: &'a MediaPlayerAttributes,
}

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats entity attributes as an array of flat objects.
    pub fn format_entities(&self, entities: &[(EntityKind, MediaPlayerAttributes)]) -> Result<String> {
        let outputs: Vec<EntityOutput<'_>> = entities
            .iter()
            .map(|(kind, attributes)| EntityOutput {
                entity_id: kind.id(),
                attributes,
            })
            .collect();
        self.format(&outputs)
    }
}
