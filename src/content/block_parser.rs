use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::{
    block::{BlockKind, ContentBlock},
    poem::{parse_verse, split_regions, Region},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifyOptions {
    // emit Spacer for blank prose lines instead of dropping them
    pub keep_blank_lines: bool,
}

pub fn classify(content: &str) -> Vec<ContentBlock> {
    classify_with(content, &ClassifyOptions::default())
}

// Splits content into ordered blocks; empty input gives no blocks
pub fn classify_with(content: &str, options: &ClassifyOptions) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    if content.is_empty() {
        return blocks;
    }

    for (region_index, region) in split_regions(content).into_iter().enumerate() {
        match region {
            Region::Poem(poem) => {
                let verses = lines(poem).filter_map(parse_verse);
                for (verse_index, verse) in verses.enumerate() {
                    blocks.push(ContentBlock::new(
                        format!("poem-{}-{}", region_index, verse_index),
                        BlockKind::PoemVerse {
                            right_text: verse.right,
                            left_text: verse.left,
                        },
                    ));
                }
            }

            Region::Prose(prose) => {
                if prose.is_empty() {
                    continue;
                }

                for (line_index, line) in lines(prose).enumerate() {
                    let id = format!("text-{}-{}", region_index, line_index);

                    if line.trim().is_empty() {
                        if options.keep_blank_lines {
                            blocks.push(ContentBlock::new(id, BlockKind::Spacer));
                        }
                        continue;
                    }

                    blocks.push(ContentBlock::new(id, classify_line(line)));
                }
            }
        }
    }

    log::debug!(
        "Classified {} bytes into {} blocks",
        content.len(),
        blocks.len()
    );

    blocks
}

fn classify_line(line: &str) -> BlockKind {
    static REGEX_HEADING: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<marker>#+)\s+(?P<text>.*)$").unwrap());
    static REGEX_NUMBERED_ITEM: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<number>[0-9]+(?:/[0-9]+)?\.)\s+(?P<text>.*)$").unwrap());

    if let Some(captures) = REGEX_HEADING.captures(line) {
        // "##" is the top level
        let level = captures["marker"].len().saturating_sub(1).max(1);
        return BlockKind::Heading {
            level,
            text: captures["text"].trim().to_owned(),
        };
    }

    if let Some(captures) = REGEX_NUMBERED_ITEM.captures(line) {
        return BlockKind::NumberedItem {
            number: captures["number"].to_owned(),
            text: captures["text"].trim().to_owned(),
        };
    }

    BlockKind::Paragraph {
        text: line.trim().to_owned(),
    }
}

// "\r\n" shows up next to "\n"
fn lines(s: &str) -> impl Iterator<Item = &str> {
    s.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}
