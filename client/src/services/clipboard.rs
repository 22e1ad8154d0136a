//! Clipboard export of one suggestion card

use crate::error::{ClientError, ClientResult};
use crate::traits::ClipboardWriter;
use shared::NameResult;

/// Format the multi-line summary copied for one result card.
///
/// Meanings are joined with the full-width separator; this format is part
/// of the user-facing contract.
pub fn format_copy_summary(result: &NameResult) -> String {
    format!(
        "名字：{}\n性别：{}\n寓意：{}\n出处：{}\n释义：{}",
        result.name,
        result.gender.label(),
        result.meaning.join("、"),
        result.source,
        result.explanation,
    )
}

/// Real clipboard writer backed by the system clipboard
#[derive(Debug, Default)]
pub struct RealClipboardWriter;

impl RealClipboardWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for RealClipboardWriter {
    fn write_text(&self, text: &str) -> ClientResult<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClientError::Clipboard { message: e.to_string() })?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClientError::Clipboard { message: e.to_string() })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Gender;

    #[test]
    fn test_copy_summary_format() {
        let result = NameResult {
            name: "明哲".to_string(),
            gender: Gender::Male,
            meaning: vec!["智慧聪颖".to_string(), "品德高尚".to_string()],
            source: "尚书".to_string(),
            explanation: "知人则哲".to_string(),
        };

        assert_eq!(
            format_copy_summary(&result),
            "名字：明哲\n性别：男\n寓意：智慧聪颖、品德高尚\n出处：尚书\n释义：知人则哲"
        );
    }
}
