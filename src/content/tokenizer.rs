use once_cell::sync::Lazy;
use regex::Regex;

use crate::content::segment::{InlineSegment, SegmentKind};

// bracketed phrases telling the reader how to recite
pub const INSTRUCTION_PHRASES: &[&str] = &["تقرأ مرة واحدة للمتعجل", "سبع مرات", "ثلاثًا"];

// Descending precedence; a match wins over a later pattern's match at the same start.
static PATTERNS: Lazy<Vec<(SegmentKind, Regex)>> = Lazy::new(|| {
    let instructions = INSTRUCTION_PHRASES
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");

    vec![
        (SegmentKind::QuranicQuote, r"﴾(?P<content>[^﴿]+)﴿".to_owned()),
        (SegmentKind::Footnote, r"\[\^(?P<content>[^\]]+)\]".to_owned()),
        (
            SegmentKind::Citation,
            r"\[(?P<content>[\x{0600}-\x{06FF}\s]+:[^\]]*[0-9\x{0660}-\x{0669}])\]".to_owned(),
        ),
        (
            SegmentKind::Instruction,
            format!(r"\[(?P<content>{})\]", instructions),
        ),
        (SegmentKind::Bracketed, r"\[(?P<content>[^\]]+)\]".to_owned()),
        (SegmentKind::Parenthesized, r"\((?P<content>[^)]+)\)".to_owned()),
        (SegmentKind::Guillemet, r"«(?P<content>[^»]+)»".to_owned()),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(&pattern).unwrap()))
    .collect()
});

#[derive(Debug)]
struct SpanMatch<'a> {
    start: usize,
    end: usize,
    kind: SegmentKind,
    content: &'a str,
}

// Segments partition the text: no gaps, no overlaps, original order.
pub fn tokenize(text: &str) -> Vec<InlineSegment> {
    let mut matches = Vec::new();

    for (kind, regex) in PATTERNS.iter() {
        for captures in regex.captures_iter(text) {
            let (Some(whole), Some(content)) = (captures.get(0), captures.name("content")) else {
                continue;
            };
            matches.push(SpanMatch {
                start: whole.start(),
                end: whole.end(),
                kind: *kind,
                content: content.as_str(),
            });
        }
    }

    // stable: equal starts keep pattern precedence
    matches.sort_by_key(|m| m.start);

    let mut segments = Vec::new();
    let mut position = 0;

    for m in matches {
        // overlaps an accepted span
        if m.start < position {
            continue;
        }

        if position < m.start {
            segments.push(InlineSegment::plain(&text[position..m.start]));
        }

        segments.push(InlineSegment {
            kind: m.kind,
            content: m.content.to_owned(),
            raw_content: text[m.start..m.end].to_owned(),
        });

        position = m.end;
    }

    if position < text.len() {
        segments.push(InlineSegment::plain(&text[position..]));
    }

    segments
}
