use regex::Regex;
use std::collections::HashMap;

use super::utils::{calc_range, line_span};
use crate::ast::{Block, Tag, TAGS_ORDER};

// A docblock region: a line-start-anchored /* ... */ span, possibly multi-line.
const RE_DOCBLOCK_COMMENT: &str = r"(?m)^[ \t]*/\*(?s:.)*?\*/";

// A tag line: leading tab run (its length is the depth), a `*`, then `@name`
// with an optional value token.
const RE_DOCBLOCK_TAG: &str = r"^(\t*) ?\* ?@(\S+)\s*(\S+)?";

// Block Extraction
pub fn extract_blocks(text: &str) -> Vec<Block> {
    let comment_re = Regex::new(RE_DOCBLOCK_COMMENT).unwrap();
    let tag_re = Regex::new(RE_DOCBLOCK_TAG).unwrap();

    let mut blocks = Vec::new();
    let mut next_id: u32 = 1;

    // find_iter yields non-overlapping matches in document order, which
    // fixes the scan order and therefore the id assignment order.
    for found in comment_re.find_iter(text) {
        let (region_start, region_end) = line_span(text, found.start(), found.end());
        let region_text = &text[region_start..region_end];

        let mut tags: HashMap<Tag, Option<String>> = HashMap::new();
        let mut depth: usize = 0;

        for line in region_text.lines() {
            if let Some(caps) = tag_re.captures(line) {
                // Depth is taken from every matching line, so the last tag
                // line in the block wins.
                depth = caps.get(1).map(|tabs| tabs.as_str().len()).unwrap_or(0);

                if let Some(tag) = Tag::from_name(&caps[2]) {
                    let value = caps.get(3).map(|v| v.as_str().to_string());
                    tags.insert(tag, value);
                }
            }
        }

        // Skip comment regions that carried no recognized tags; they do not
        // consume an id.
        if tags.is_empty() {
            continue;
        }

        let path = own_path(&tags);
        let region = calc_range(text, found.start(), found.end() - found.start());

        blocks.push(Block {
            id: next_id,
            tags,
            depth,
            path,
            path_string: String::new(),
            region,
        });
        next_id += 1;
    }

    blocks
}

// A block's own path fragments, in the fixed tag order. A tag recorded
// without a value still contributes an empty fragment so positions keep
// their meaning.
fn own_path(tags: &HashMap<Tag, Option<String>>) -> Vec<String> {
    TAGS_ORDER
        .iter()
        .filter_map(|tag| tags.get(tag))
        .map(|value| value.clone().unwrap_or_default())
        .collect()
}
