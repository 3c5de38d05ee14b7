pub(super) const POEM_START: char = 'F';
pub(super) const POEM_END: char = 'X';
const HEMISTICH_SEPARATOR: &str = "__";

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Region<'a> {
    Prose(&'a str),
    Poem(&'a str),
}

// Prose and poem regions alternate, starting and ending with prose (possibly empty).
// Each POEM_START pairs with the next POEM_END; without one the poem runs to the end.
pub(super) fn split_regions(content: &str) -> Vec<Region<'_>> {
    let mut regions = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find(POEM_START) {
        regions.push(Region::Prose(&rest[..start]));

        let inner = &rest[(start + POEM_START.len_utf8())..];
        match inner.find(POEM_END) {
            Some(end) => {
                regions.push(Region::Poem(&inner[..end]));
                rest = &inner[(end + POEM_END.len_utf8())..];
            }
            None => {
                log::debug!("Poem region without closing {:?}", POEM_END);
                regions.push(Region::Poem(inner));
                rest = "";
            }
        }
    }

    regions.push(Region::Prose(rest));
    regions
}

pub(super) struct Verse {
    pub(super) right: String,
    pub(super) left: Option<String>,
}

// None for a blank line
pub(super) fn parse_verse(line: &str) -> Option<Verse> {
    if line.trim().is_empty() {
        return None;
    }

    let (right, left) = match line.split_once(HEMISTICH_SEPARATOR) {
        Some((right, left)) => (right, Some(left.trim())),
        None => (line, None),
    };

    Some(Verse {
        right: right.trim().to_owned(),
        left: left.filter(|l| !l.is_empty()).map(str::to_owned),
    })
}
