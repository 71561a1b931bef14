//! Batches of formatting requests read from JSON.

use serde::Serialize;
use serde_json::Value;

use crate::generator::{Generator, Operation, Platform};

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of requests or a single request object")]
    NotABatch,
    #[error("request #{index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a JSON array of requests. A single object is accepted as a batch of one.
pub fn parse_batch(input: &str) -> Result<Vec<Operation>, RequestError> {
    let value: Value = serde_json::from_str(input)?;
    let items = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => return Err(RequestError::NotABatch),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| RequestError::Invalid { index, source })
        })
        .collect()
}

/// Result of rendering a batch, as printed by `render --json`
#[derive(Debug, Serialize)]
pub struct BatchOutput {
    pub platform: Platform,
    pub outputs: Vec<String>,
}

pub fn render_batch(ops: &[Operation], generator: &dyn Generator) -> BatchOutput {
    BatchOutput {
        platform: generator.platform(),
        outputs: ops.iter().map(|op| op.render(generator)).collect(),
    }
}

impl BatchOutput {
    /// Outputs separated by blank lines
    pub fn joined(&self) -> String {
        self.outputs
            .iter()
            .filter(|out| !out.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
