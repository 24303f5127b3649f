use super::Renderer;
use crate::error::Result;
use crate::understanding::{CorrelationMatrix, DatasetMetadata, Labels};
use serde::Serialize;
use serde_json::json;

/// Serializes results as JSON. Labels only affect the `description` field;
/// keys stay stable so the output can be consumed by programs.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        let s = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(s)
    }
}

impl Renderer for JsonRenderer {
    fn render_metadata(&self, metadata: &DatasetMetadata, labels: &Labels) -> Result<String> {
        self.encode(&json!({
            "description": labels.shape_sentence(metadata.row_count, metadata.column_count),
            "metadata": metadata,
        }))
    }

    fn render_correlation(&self, matrix: &CorrelationMatrix, _labels: &Labels) -> Result<String> {
        self.encode(matrix)
    }
}
