use serde::Serialize;

use crate::{
    cache::ParseCache,
    collection::zikr::Zikr,
    content::{
        block::{BlockKind, ContentBlock},
        segment::InlineSegment,
        tokenizer::tokenize,
    },
};

// Inline segments of each text field of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockSegments {
    Text(Vec<InlineSegment>),
    Verse {
        right: Vec<InlineSegment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        left: Option<Vec<InlineSegment>>,
    },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedBlock {
    #[serde(flatten)]
    pub block: ContentBlock,
    pub segments: BlockSegments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedZikr {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>, // shown as is
    pub blocks: Vec<RenderedBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Vec<RenderedBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

// Styling of (block kind, segment kind) pairs is left to the presentation layer.
pub fn render_content(blocks: &[ContentBlock]) -> Vec<RenderedBlock> {
    blocks.iter().map(render_block).collect()
}

pub fn render_block(block: &ContentBlock) -> RenderedBlock {
    let segments = match &block.kind {
        BlockKind::Heading { text, .. }
        | BlockKind::NumberedItem { text, .. }
        | BlockKind::Paragraph { text } => BlockSegments::Text(tokenize(text)),

        BlockKind::PoemVerse {
            right_text,
            left_text,
        } => BlockSegments::Verse {
            right: tokenize(right_text),
            left: left_text.as_deref().map(tokenize),
        },

        BlockKind::Spacer => BlockSegments::Empty,
    };

    RenderedBlock {
        block: block.clone(),
        segments,
    }
}

pub fn render_zikr(zikr: &Zikr, cache: &mut ParseCache) -> RenderedZikr {
    let blocks = render_content(&cache.get_or_parse(&zikr.content));

    let footer = zikr
        .footer
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .map(|f| render_content(&cache.get_or_parse(f)));

    RenderedZikr {
        title: zikr.title.clone(),
        notes: zikr.notes.clone().filter(|n| !n.trim().is_empty()),
        blocks,
        footer,
        audio_url: zikr.url.clone().filter(|u| !u.is_empty()),
    }
}
