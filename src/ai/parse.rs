//! Parsing the evaluator's reply
//!
//! The evaluator is asked for a fenced JSON object but is free to wrap it in
//! prose or use a different fence tag. Only fence and tag stripping is
//! attempted; whatever remains must be valid JSON.

use crate::error::{GradeError, GradeResult};
use indexmap::IndexMap;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::sync::OnceLock;

/// Accepted spellings of the score field, first match wins.
const SCORE_KEYS: &[&str] = &["score", "分数"];
/// Accepted spellings of the reason field, first match wins.
const REASON_KEYS: &[&str] = &["reason", "理由", "rationale"];

/// One category as returned by the evaluator.
///
/// `score` and `reason` are read out for validation and display, while the
/// object itself is kept field for field and serialises back exactly as the
/// evaluator wrote it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub score: serde_json::Number,
    pub reason: String,
    fields: IndexMap<String, serde_json::Value>,
}

impl CategoryScore {
    /// Every field of the category object, in the evaluator's order
    pub fn fields(&self) -> &IndexMap<String, serde_json::Value> {
        &self.fields
    }
}

impl Serialize for CategoryScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CategoryScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let score = match SCORE_KEYS.iter().find_map(|k| fields.get(*k)) {
            Some(serde_json::Value::Number(n)) => n.clone(),
            Some(other) => {
                return Err(de::Error::custom(format!("score is not a number: {}", other)))
            }
            None => return Err(de::Error::missing_field("score")),
        };
        let reason = REASON_KEYS
            .iter()
            .find_map(|k| fields.get(*k).and_then(|v| v.as_str()))
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            score,
            reason,
            fields,
        })
    }
}

/// The evaluator's reply after parsing, before any validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvaluation {
    /// Category name to score, in the evaluator's order
    #[serde(alias = "评分", alias = "categories")]
    pub scores: IndexMap<String, CategoryScore>,
    #[serde(default, alias = "评价与建议")]
    pub advice: String,
}

const FENCE: &str = "```";

/// A fenced block embedded in prose, spanning to the last closing fence.
fn embedded_block() -> &'static Regex {
    static EMBEDDED: OnceLock<Regex> = OnceLock::new();
    EMBEDDED.get_or_init(|| {
        Regex::new(r"(?s)```[A-Za-z0-9_+-]*[ \t]*\r?\n?(.*)```").expect("valid regex")
    })
}

/// Remove markdown fences and an optional language tag.
///
/// A reply that opens with a fence loses only its outermost fences, so
/// backticks quoted inside JSON strings survive. Otherwise a fenced block
/// embedded in prose is taken from its opening fence to the last closing
/// fence. Failing both, a trailing fence and a leading bare tag such as
/// `json` are trimmed.
pub fn strip_fences(reply: &str) -> &str {
    let trimmed = reply.trim();

    if let Some(rest) = trimmed.strip_prefix(FENCE) {
        let body = rest.strip_suffix(FENCE).unwrap_or(rest).trim();
        return strip_tag(body);
    }

    if let Some(inner) = embedded_block().captures(trimmed).and_then(|c| c.get(1)) {
        return inner.as_str().trim();
    }

    strip_tag(trimmed.strip_suffix(FENCE).unwrap_or(trimmed).trim())
}

/// Drop a leading alphabetic token when it stands alone before the payload.
fn strip_tag(body: &str) -> &str {
    let tag_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-')))
        .unwrap_or(body.len());
    if tag_len == 0 || !body.as_bytes()[0].is_ascii_alphabetic() {
        return body;
    }
    let rest = body[tag_len..].trim_start();
    if rest.starts_with('{') {
        rest
    } else {
        body
    }
}

/// Parse the evaluator's reply into a [`RawEvaluation`].
pub fn parse_evaluation(reply: &str) -> GradeResult<RawEvaluation> {
    let payload = strip_fences(reply);
    serde_json::from_str(payload)
        .map_err(|e| GradeError::MalformedEvaluation(format!("{} (payload: {} bytes)", e, payload.len())))
}
