use http::StatusCode;

/// Outcome of a successful queue submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub status: u16,
    pub message_id: Option<String>,
}

impl SendReceipt {
    #[must_use]
    pub fn new(status: u16, message_id: Option<String>) -> Self {
        Self { status, message_id }
    }

    /// Textual name of the reported status: the canonical reason phrase in
    /// PascalCase, e.g. `OK` for 200 and `NoContent` for 204.
    ///
    /// Codes without a canonical name are rendered as their decimal value.
    #[must_use]
    pub fn status_text(&self) -> String {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .map_or_else(|| self.status.to_string(), pascal_case)
    }
}

fn pascal_case(phrase: &str) -> String {
    phrase
        .replace('\'', "")
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect()
}
