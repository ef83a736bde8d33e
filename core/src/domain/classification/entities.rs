use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Image,
}

/// Result of one classification call, ready for the wire.
///
/// `prompt_template` is populated only on the image path, which echoes the
/// raw instruction template for diagnostics. The text path never sets it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOutcome {
    pub message: String,
    pub prompt_template: Option<&'static str>,
}

/// Overall verdict the classifier is instructed to compute, with
/// precedence haram > musbooh > halal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Halal,
    Musbooh,
    Haram,
}

/// The JSON shape the classifier is instructed to emit.
///
/// The relay is schema-blind: responses are forwarded as raw text and never
/// validated against this type. It documents the external contract and backs
/// the tests; validating before forwarding is a deliberate extension point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub halal: Vec<String>,
    pub musbooh: Vec<String>,
    pub haram: Vec<String>,
    pub explanations: BTreeMap<String, String>,
    pub result: Verdict,
}
