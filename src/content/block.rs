use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: String,
    #[serde(flatten)]
    pub kind: BlockKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum BlockKind {
    // "## ..." ("##" is level 1)
    Heading {
        level: usize,
        text: String,
    },

    // one line of a F...X region
    #[serde(rename_all = "camelCase")]
    PoemVerse {
        right_text: String,
        left_text: Option<String>,
    },

    // "3. ..." / "3/4. ..."
    NumberedItem {
        number: String,
        text: String,
    },

    Paragraph {
        text: String,
    },

    // blank line, only with ClassifyOptions::keep_blank_lines
    Spacer,
}

impl ContentBlock {
    pub fn new(id: String, kind: BlockKind) -> Self {
        Self { id, kind }
    }

    // text of Heading / NumberedItem / Paragraph
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Heading { text, .. }
            | BlockKind::NumberedItem { text, .. }
            | BlockKind::Paragraph { text } => Some(text),
            BlockKind::PoemVerse { .. } | BlockKind::Spacer => None,
        }
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self.kind, BlockKind::Spacer)
    }
}
