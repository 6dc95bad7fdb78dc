//! Tool reply type and the trade success heuristic.

/// What every tool returns: descriptive text plus a success flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReply {
    pub text: String,
    pub success: bool,
}

impl ToolReply {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }

    /// Classify trade text with [`trade_succeeded`].
    pub fn from_trade_text(text: String) -> Self {
        let success = trade_succeeded(&text);
        Self { text, success }
    }
}

/// Lexical success check for trade replies, kept for compatibility with
/// existing callers: successful iff the text contains "successfully" and
/// does not contain "failed" (case-insensitive). A substring heuristic,
/// not a status-code check; "failed" anywhere dominates.
pub fn trade_succeeded(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("successfully") && !lower.contains("failed")
}
