use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    PlainText,
    QuranicQuote,  // ﴾…﴿
    Footnote,      // [^…]
    Citation,      // [label: …1]
    Instruction,   // [allow-listed phrase]
    Bracketed,     // […]
    Parenthesized, // (…)
    Guillemet,     // «…»
}

impl SegmentKind {
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::PlainText => ("", ""),
            Self::QuranicQuote => ("﴾", "﴿"),
            Self::Footnote => ("[^", "]"),
            Self::Citation | Self::Instruction | Self::Bracketed => ("[", "]"),
            Self::Parenthesized => ("(", ")"),
            Self::Guillemet => ("«", "»"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineSegment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    pub content: String,
    pub raw_content: String,
}

impl InlineSegment {
    pub fn plain(text: &str) -> Self {
        Self {
            kind: SegmentKind::PlainText,
            content: text.to_owned(),
            raw_content: text.to_owned(),
        }
    }

    // content with the delimiters of its kind put back
    pub fn to_source(&self) -> String {
        let (open, close) = self.kind.delimiters();
        format!("{}{}{}", open, self.content, close)
    }
}

// concatenated raw contents, i.e. the tokenized text
pub fn join_raw(segments: &[InlineSegment]) -> String {
    segments.iter().map(|s| s.raw_content.as_str()).collect()
}
