use std::collections::HashMap;
use tower_lsp::lsp_types::Range;

// Recognized tag vocabulary. The array order is the fragment order within a
// path: a block tagged {function, class} contributes [function-value, class-value].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Package,
    Module,
    Submodule,
    Function,
    Class,
    Method,
}

pub const TAGS_ORDER: [Tag; 6] = [
    Tag::Package,
    Tag::Module,
    Tag::Submodule,
    Tag::Function,
    Tag::Class,
    Tag::Method,
];

impl Tag {
    pub fn from_name(name: &str) -> Option<Tag> {
        match name {
            "package" => Some(Tag::Package),
            "module" => Some(Tag::Module),
            "submodule" => Some(Tag::Submodule),
            "function" => Some(Tag::Function),
            "class" => Some(Tag::Class),
            "method" => Some(Tag::Method),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::Package => "package",
            Tag::Module => "module",
            Tag::Submodule => "submodule",
            Tag::Function => "function",
            Tag::Class => "class",
            Tag::Method => "method",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Block {
    pub id: u32,
    // Key present = tag line seen; None value = tag line had no value token.
    pub tags: HashMap<Tag, Option<String>>,
    pub depth: usize,
    pub path: Vec<String>,
    pub path_string: String,
    pub region: Range,
}

#[derive(Debug, Clone)]
pub struct Quicklist {
    pub labels: Vec<String>,
    pub blocks: Vec<Block>,
}

impl Quicklist {
    // Maps a UI selection to the chosen block's region. `None` is the
    // cancellation case; an out-of-range index also resolves to nothing.
    pub fn select(&self, choice: Option<usize>) -> Option<Range> {
        choice
            .and_then(|index| self.blocks.get(index))
            .map(|block| block.region)
    }
}
