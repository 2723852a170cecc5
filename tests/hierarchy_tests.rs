use std::collections::HashMap;

use docblock_lsp::ast::Block;
use docblock_lsp::parser::{build_hierarchy, build_quicklist};
use tower_lsp::lsp_types::{Position, Range};

fn block(id: u32, depth: usize, path: &[&str]) -> Block {
    Block {
        id,
        tags: HashMap::new(),
        depth,
        path: path.iter().map(|s| s.to_string()).collect(),
        path_string: String::new(),
        region: Range::new(Position::new(id - 1, 0), Position::new(id - 1, 1)),
    }
}

#[test]
fn test_ancestry_prefixing() {
    let mut blocks = vec![
        block(1, 0, &["pkg"]),
        block(2, 1, &["Mod"]),
        block(3, 2, &["meth"]),
    ];

    build_hierarchy(&mut blocks);

    assert_eq!(blocks[0].path, vec!["pkg"]);
    assert_eq!(blocks[1].path, vec!["pkg", "Mod"]);
    assert_eq!(blocks[2].path, vec!["pkg", "Mod", "meth"]);
}

#[test]
fn test_no_ancestor_leaves_path_alone() {
    let mut blocks = vec![block(1, 3, &["deep"])];

    build_hierarchy(&mut blocks);

    assert_eq!(blocks[0].path, vec!["deep"]);
}

#[test]
fn test_parent_depth_can_be_any_shallower_value() {
    // No block at depth 1; the depth-2 block attaches to depth 0 directly.
    let mut blocks = vec![block(1, 0, &["root"]), block(2, 2, &["leaf"])];

    build_hierarchy(&mut blocks);

    assert_eq!(blocks[1].path, vec!["root", "leaf"]);
}

#[test]
fn test_siblings_share_parent() {
    let mut blocks = vec![
        block(1, 0, &["root"]),
        block(2, 1, &["a"]),
        block(3, 1, &["b"]),
    ];

    build_hierarchy(&mut blocks);

    assert_eq!(blocks[1].path, vec!["root", "a"]);
    assert_eq!(blocks[2].path, vec!["root", "b"]);
}

#[test]
fn test_later_shallow_block_adopts_following_deep_blocks() {
    // There is no scope tracking: once B replaces A at depth 0, deeper
    // blocks that follow attach to B even if they belong to A in the source.
    let mut blocks = vec![
        block(1, 0, &["A"]),
        block(2, 1, &["a_child"]),
        block(3, 0, &["B"]),
        block(4, 1, &["stray"]),
    ];

    build_hierarchy(&mut blocks);

    assert_eq!(blocks[1].path, vec!["A", "a_child"]);
    assert_eq!(blocks[3].path, vec!["B", "stray"]);
}

#[test]
fn test_grandparent_prefix_is_transitive() {
    // The parent's path is already prefixed when its child reads it, so the
    // chain accumulates across depths seen out of step.
    let mut blocks = vec![
        block(1, 0, &["pkg"]),
        block(2, 2, &["Cls"]),
        block(3, 4, &["meth"]),
    ];

    build_hierarchy(&mut blocks);

    assert_eq!(blocks[2].path, vec!["pkg", "Cls", "meth"]);
}

#[test]
fn test_quicklist_sorted_lexicographically() {
    let blocks = vec![
        block(1, 0, &["b", "c"]),
        block(2, 0, &["a", "d"]),
        block(3, 0, &["a", "b"]),
    ];

    let quicklist = build_quicklist(blocks);

    assert_eq!(quicklist.labels, vec!["a.b", "a.d", "b.c"]);
    assert_eq!(
        quicklist.blocks.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![3, 2, 1]
    );
}

#[test]
fn test_quicklist_sort_is_stable() {
    let blocks = vec![
        block(1, 0, &["same"]),
        block(2, 0, &["same"]),
        block(3, 0, &["same"]),
    ];

    let quicklist = build_quicklist(blocks);

    assert_eq!(
        quicklist.blocks.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_empty_path_string_sorts_first() {
    let blocks = vec![block(1, 0, &["visible"]), block(2, 0, &[""])];

    let quicklist = build_quicklist(blocks);

    assert_eq!(quicklist.labels, vec!["", "visible"]);
}

#[test]
fn test_labels_parallel_to_blocks() {
    let blocks = vec![block(1, 0, &["z"]), block(2, 1, &["y"])];

    let quicklist = build_quicklist(blocks);

    assert_eq!(quicklist.labels.len(), quicklist.blocks.len());
    for (label, block) in quicklist.labels.iter().zip(&quicklist.blocks) {
        assert_eq!(label, &block.path_string);
    }
}

#[test]
fn test_select_cancellation_is_noop() {
    let quicklist = build_quicklist(vec![block(1, 0, &["only"])]);

    assert!(quicklist.select(None).is_none());
}

#[test]
fn test_select_out_of_range_is_noop() {
    let quicklist = build_quicklist(vec![block(1, 0, &["only"])]);

    assert!(quicklist.select(Some(5)).is_none());
}

#[test]
fn test_select_on_empty_list() {
    let quicklist = build_quicklist(Vec::new());

    assert!(quicklist.labels.is_empty());
    assert!(quicklist.select(Some(0)).is_none());
}

#[test]
fn test_select_returns_block_region() {
    let quicklist = build_quicklist(vec![block(1, 0, &["b"]), block(2, 0, &["a"])]);

    // Index 0 is "a", which was scanned second (region on line 1).
    let region = quicklist.select(Some(0)).unwrap();
    assert_eq!(region.start.line, 1);
}
