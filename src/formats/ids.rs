//! The `IDS_SOLO.txt` localization resource
//!
//! A line-oriented blob of repeated `[KEY]` markers, each followed by the
//! multi-line text for that key. Three marker patterns are recognized:
//!
//! ```text
//! [SOLO.GATE<id>]                gate display name
//! [SOLO.GATE<id>_EXPLANATION]    gate description
//! [SOLO.CHAPTER<id>]             chapter description
//! ```
//!
//! Text before the first marker is discarded. A key with empty text still
//! occupies its marker line so the record survives a round trip.

use std::fmt::Write;

use indexmap::IndexMap;

const GATE_EXPLANATION_SUFFIX: &str = "_EXPLANATION";

/// Parsed lookup tables from one `IDS_SOLO.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoloTexts {
    pub gate_names: IndexMap<u32, String>,
    pub gate_descriptions: IndexMap<u32, String>,
    pub chapter_descriptions: IndexMap<u32, String>,
}

impl SoloTexts {
    pub fn gate_name(&self, gate_id: u32) -> String {
        self.gate_names.get(&gate_id).cloned().unwrap_or_default()
    }

    pub fn gate_description(&self, gate_id: u32) -> String {
        self.gate_descriptions.get(&gate_id).cloned().unwrap_or_default()
    }

    pub fn chapter_description(&self, chapter_id: u32) -> String {
        self.chapter_descriptions.get(&chapter_id).cloned().unwrap_or_default()
    }
}

/// The serializer's input: one gate's texts with its chapters in array order.
#[derive(Debug, Clone, Default)]
pub struct GateTextBlock {
    pub gate_id: u32,
    pub name: String,
    pub description: String,
    /// `(chapter_id, description)` in chapter array order.
    pub chapters: Vec<(u32, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    GateName(u32),
    GateDescription(u32),
    ChapterDescription(u32),
}

fn parse_marker(line: &str) -> Option<Target> {
    let key = line.strip_prefix('[')?.strip_suffix(']')?;
    let key = key.strip_prefix("SOLO.")?;
    if let Some(rest) = key.strip_prefix("GATE") {
        if let Some(id) = rest.strip_suffix(GATE_EXPLANATION_SUFFIX) {
            id.parse().ok().map(Target::GateDescription)
        } else {
            rest.parse().ok().map(Target::GateName)
        }
    } else if let Some(rest) = key.strip_prefix("CHAPTER") {
        rest.parse().ok().map(Target::ChapterDescription)
    } else {
        None
    }
}

/// Parse the localization blob into keyed lookup tables.
///
/// Unrecognized markers and lines before the first marker are dropped.
pub fn parse_solo_texts(lines: &[String]) -> SoloTexts {
    let mut texts = SoloTexts::default();
    let mut target: Option<Target> = None;
    let mut block: Vec<&str> = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(next) = parse_marker(line) {
            flush(&mut texts, target, &block);
            block.clear();
            target = Some(next);
        } else if target.is_some() {
            block.push(line);
        }
    }
    // The last block has no following marker to flush it.
    flush(&mut texts, target, &block);

    texts
}

fn flush(texts: &mut SoloTexts, target: Option<Target>, block: &[&str]) {
    let Some(target) = target else {
        return;
    };
    let text = block.join("\n");
    match target {
        Target::GateName(id) => texts.gate_names.insert(id, text),
        Target::GateDescription(id) => texts.gate_descriptions.insert(id, text),
        Target::ChapterDescription(id) => texts.chapter_descriptions.insert(id, text),
    };
}

/// Serialize gate and chapter texts back into the blob format.
///
/// Gates are emitted in slice order, each followed by its chapters in array
/// order. Empty texts still emit their marker plus an empty line.
pub fn write_solo_texts(blocks: &[GateTextBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        let _ = writeln!(out, "[SOLO.GATE{}]", block.gate_id);
        let _ = writeln!(out, "{}", block.name);
        let _ = writeln!(out, "[SOLO.GATE{}{}]", block.gate_id, GATE_EXPLANATION_SUFFIX);
        let _ = writeln!(out, "{}", block.description);
        for (chapter_id, description) in &block.chapters {
            let _ = writeln!(out, "[SOLO.CHAPTER{chapter_id}]");
            let _ = writeln!(out, "{description}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_parse_basic_blob() {
        let texts = parse_solo_texts(&lines(
            "[SOLO.GATE1]\nDuel Strategy\n[SOLO.GATE1_EXPLANATION]\nLearn the basics.\nStep by step.\n[SOLO.CHAPTER10001]\nFirst duel.",
        ));

        assert_eq!(texts.gate_name(1), "Duel Strategy");
        assert_eq!(texts.gate_description(1), "Learn the basics.\nStep by step.");
        assert_eq!(texts.chapter_description(10001), "First duel.");
    }

    #[test]
    fn test_lines_before_first_marker_discarded() {
        let texts = parse_solo_texts(&lines("stray header\n[SOLO.GATE2]\nName"));
        assert_eq!(texts.gate_names.len(), 1);
        assert_eq!(texts.gate_name(2), "Name");
    }

    #[test]
    fn test_final_block_is_flushed() {
        let texts = parse_solo_texts(&lines("[SOLO.CHAPTER5]\ntrailing text"));
        assert_eq!(texts.chapter_description(5), "trailing text");
    }

    #[test]
    fn test_round_trip_including_empty_description() {
        let blocks = vec![
            GateTextBlock {
                gate_id: 1,
                name: "Duel Strategy".to_string(),
                description: "Line one.\nLine two.".to_string(),
                chapters: vec![(10001, "First duel.".to_string()), (10002, String::new())],
            },
            GateTextBlock {
                gate_id: 2,
                name: "Synchro Summoning".to_string(),
                description: String::new(),
                chapters: vec![],
            },
        ];

        let blob = write_solo_texts(&blocks);
        let texts = parse_solo_texts(&lines(&blob));

        assert_eq!(texts.gate_name(1), "Duel Strategy");
        assert_eq!(texts.gate_description(1), "Line one.\nLine two.");
        assert_eq!(texts.gate_name(2), "Synchro Summoning");
        assert_eq!(texts.gate_description(2), "");
        assert_eq!(texts.chapter_description(10001), "First duel.");
        // The empty chapter description still round-trips as a record.
        assert_eq!(texts.chapter_descriptions.get(&10002), Some(&String::new()));
    }
}
