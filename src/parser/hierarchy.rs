use std::collections::HashMap;

use crate::ast::{Block, Quicklist};

// Hierarchy Resolution
//
// Ancestry is inferred from depth alone: a block's parent is the most
// recently scanned block at the nearest strictly shallower depth. There is
// no scope-closure tracking, so a later shallow block adopts whatever deeper
// blocks follow it.
pub fn build_hierarchy(blocks: &mut [Block]) {
    let mut position_by_id: HashMap<u32, usize> = HashMap::new();
    let mut last_by_depth: HashMap<usize, u32> = HashMap::new();

    for (position, block) in blocks.iter().enumerate() {
        position_by_id.insert(block.id, position);
    }

    // Blocks must be visited in scan order: a parent's path is already fully
    // prefixed by the time its descendants read it.
    for position in 0..blocks.len() {
        let depth = blocks[position].depth;

        // Search for my parent block, if any. The parent's depth can be any
        // value below mine, not just depth - 1.
        let mut parent_position = None;
        let mut candidate = depth;
        while candidate > 0 {
            candidate -= 1;
            if let Some(&id) = last_by_depth.get(&candidate) {
                parent_position = position_by_id.get(&id).copied();
                break;
            }
        }

        if let Some(parent) = parent_position {
            let mut prefixed = blocks[parent].path.clone();
            prefixed.extend(blocks[position].path.iter().cloned());
            blocks[position].path = prefixed;
        }

        // This block is now the candidate ancestor at its own depth,
        // whether or not it found a parent itself.
        last_by_depth.insert(depth, blocks[position].id);
    }
}

// Quicklist Building
pub fn build_quicklist(mut blocks: Vec<Block>) -> Quicklist {
    build_hierarchy(&mut blocks);

    for block in &mut blocks {
        block.path_string = block.path.join(".");
    }

    // sort_by is stable, so equal path strings keep their scan order.
    blocks.sort_by(|a, b| a.path_string.cmp(&b.path_string));

    let labels = blocks.iter().map(|block| block.path_string.clone()).collect();

    Quicklist { labels, blocks }
}
