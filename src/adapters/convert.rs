//! Conversions between server payloads and the bridge's contracts, plus
//! encoding-aware mapping from protocol coordinates into buffer offsets.

use lsp_types::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::ports::proto::{
    CqLocation, CqPosition, CqRange, DecoratedSymbol, LensItem, ParentKind, PositionEncoding,
    ProgressCounters, StorageClass, SymbolKind,
};
use crate::store::hierarchy::TreeNode;

pub fn symbol_kind_from_u32(kind: u32) -> SymbolKind {
    match kind {
        1 => SymbolKind::File,
        2 => SymbolKind::Module,
        3 => SymbolKind::Namespace,
        4 => SymbolKind::Package,
        5 => SymbolKind::Class,
        6 => SymbolKind::Method,
        7 => SymbolKind::Property,
        8 => SymbolKind::Field,
        9 => SymbolKind::Constructor,
        10 => SymbolKind::Enum,
        11 => SymbolKind::Interface,
        12 => SymbolKind::Function,
        13 => SymbolKind::Variable,
        14 => SymbolKind::Constant,
        15 => SymbolKind::String,
        16 => SymbolKind::Number,
        17 => SymbolKind::Boolean,
        18 => SymbolKind::Array,
        19 => SymbolKind::Object,
        20 => SymbolKind::Key,
        21 => SymbolKind::Null,
        22 => SymbolKind::EnumMember,
        23 => SymbolKind::Struct,
        24 => SymbolKind::Event,
        25 => SymbolKind::Operator,
        26 => SymbolKind::TypeParameter,
        252 => SymbolKind::TypeAlias,
        253 => SymbolKind::Parameter,
        254 => SymbolKind::StaticMethod,
        255 => SymbolKind::Macro,
        _ => SymbolKind::Unknown,
    }
}

pub fn parent_kind_from_u32(kind: u32) -> ParentKind {
    match kind {
        1 => ParentKind::File,
        2 => ParentKind::Type,
        3 => ParentKind::Func,
        4 => ParentKind::Var,
        _ => ParentKind::Invalid,
    }
}

pub fn storage_class_from_u32(storage: u32) -> StorageClass {
    match storage {
        1 => StorageClass::None,
        2 => StorageClass::Extern,
        3 => StorageClass::Static,
        4 => StorageClass::PrivateExtern,
        5 => StorageClass::Auto,
        6 => StorageClass::Register,
        _ => StorageClass::Invalid,
    }
}

pub fn position_from_lsp(position: lsp_types::Position) -> CqPosition {
    CqPosition {
        line: position.line,
        character: position.character,
    }
}

pub fn position_to_lsp(position: CqPosition) -> lsp_types::Position {
    lsp_types::Position {
        line: position.line,
        character: position.character,
    }
}

pub fn range_from_lsp(range: lsp_types::Range) -> CqRange {
    CqRange {
        start: position_from_lsp(range.start),
        end: position_from_lsp(range.end),
    }
}

pub fn range_to_lsp(range: CqRange) -> lsp_types::Range {
    lsp_types::Range {
        start: position_to_lsp(range.start),
        end: position_to_lsp(range.end),
    }
}

pub fn location_from_lsp(location: lsp_types::Location) -> CqLocation {
    CqLocation {
        uri: location.uri,
        range: range_from_lsp(location.range),
    }
}

#[derive(Deserialize)]
struct RawSemanticSymbol {
    #[serde(rename = "stableId", default)]
    stable_id: u32,
    #[serde(rename = "parentKind", default)]
    parent_kind: u32,
    #[serde(default)]
    kind: u32,
    #[serde(rename = "isTypeMember", default)]
    is_type_member: bool,
    #[serde(default)]
    storage: u32,
    #[serde(default)]
    ranges: Vec<CqRange>,
}

#[derive(Deserialize)]
struct RawSemanticHighlight {
    uri: Url,
    #[serde(default)]
    symbols: Vec<RawSemanticSymbol>,
}

/// Decodes a `$cquery/publishSemanticHighlighting` payload. Malformed
/// payloads yield `None`; unknown kind integers survive as `Unknown` and are
/// skipped downstream.
pub fn semantic_highlight_from_params(params: Value) -> Option<(Url, Vec<DecoratedSymbol>)> {
    let raw: RawSemanticHighlight = serde_json::from_value(params).ok()?;
    let symbols = raw
        .symbols
        .into_iter()
        .map(|sym| DecoratedSymbol {
            stable_id: sym.stable_id,
            parent_kind: parent_kind_from_u32(sym.parent_kind),
            kind: symbol_kind_from_u32(sym.kind),
            is_type_member: sym.is_type_member,
            storage: storage_class_from_u32(sym.storage),
            ranges: sym.ranges,
        })
        .collect();
    Some((raw.uri, symbols))
}

pub fn progress_from_params(params: Value) -> Option<ProgressCounters> {
    serde_json::from_value(params).ok()
}

#[derive(Deserialize)]
struct RawHierarchyNode {
    id: Value,
    #[serde(default)]
    name: String,
    #[serde(default)]
    location: Option<CqLocation>,
    #[serde(rename = "numChildren", default)]
    num_children: usize,
    #[serde(default)]
    children: Vec<RawHierarchyNode>,
}

fn node_id_string(id: &Value) -> Option<String> {
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn tree_node_from_raw(raw: RawHierarchyNode) -> Option<TreeNode> {
    let id = node_id_string(&raw.id)?;
    let children = raw
        .children
        .into_iter()
        .filter_map(tree_node_from_raw)
        .collect();
    Some(TreeNode {
        id,
        name: raw.name,
        location: raw.location,
        num_children: raw.num_children,
        children,
        depth: 0,
    })
}

/// Decodes a hierarchy-root result. The server may answer with a node array
/// or with a single root object; either becomes a forest. `null` and
/// malformed results are "nothing to show".
pub fn hierarchy_forest_from_result(result: Value) -> Option<Vec<TreeNode>> {
    match result {
        Value::Null => None,
        Value::Array(items) => {
            let nodes: Vec<RawHierarchyNode> =
                serde_json::from_value(Value::Array(items)).ok()?;
            Some(nodes.into_iter().filter_map(tree_node_from_raw).collect())
        }
        Value::Object(_) => {
            let node: RawHierarchyNode = serde_json::from_value(result).ok()?;
            Some(tree_node_from_raw(node).into_iter().collect())
        }
        _ => None,
    }
}

/// Decodes a children-expansion result: a node list, or an object whose
/// `children` field carries the list.
pub fn hierarchy_children_from_result(result: Value) -> Option<Vec<TreeNode>> {
    match result {
        Value::Array(_) => hierarchy_forest_from_result(result),
        Value::Object(_) => {
            let node: RawHierarchyNode = serde_json::from_value(result).ok()?;
            Some(
                node.children
                    .into_iter()
                    .filter_map(tree_node_from_raw)
                    .collect(),
            )
        }
        _ => None,
    }
}

/// Decodes a `textDocument/codeLens` result into renderable items. Lenses
/// without a resolved command title have nothing to display and are dropped.
pub fn lens_items_from_result(result: Value) -> Vec<LensItem> {
    let lenses: Vec<lsp_types::CodeLens> = match serde_json::from_value(result) {
        Ok(lenses) => lenses,
        Err(_) => return Vec::new(),
    };

    lenses
        .into_iter()
        .filter_map(|lens| {
            let title = lens.command?.title;
            if title.is_empty() {
                return None;
            }
            Some(LensItem {
                range: range_from_lsp(lens.range),
                title,
            })
        })
        .collect()
}

fn line_len_chars(line: ropey::RopeSlice<'_>) -> usize {
    let mut len = line.len_chars();
    let mut chars = line.chars_at(len);
    while let Some(ch) = chars.prev() {
        if ch == '\n' || ch == '\r' {
            len -= 1;
        } else {
            break;
        }
    }
    len
}

/// Protocol column -> char offset within one line, honoring the negotiated
/// position encoding. Columns past the line end clamp to the line end.
pub fn column_to_char_offset(
    line: ropey::RopeSlice<'_>,
    column: u32,
    encoding: PositionEncoding,
) -> usize {
    let mut units = 0u32;
    let mut chars = 0usize;
    let mut it = line.chars().peekable();
    while let Some(ch) = it.next() {
        if ch == '\n' {
            break;
        }
        if ch == '\r' && matches!(it.peek(), Some('\n')) {
            break;
        }
        let next = units
            + match encoding {
                PositionEncoding::Utf8 => ch.len_utf8() as u32,
                PositionEncoding::Utf16 => ch.len_utf16() as u32,
                PositionEncoding::Utf32 => 1,
            };
        if next > column {
            break;
        }
        units = next;
        chars += 1;
    }
    chars
}

/// Protocol position -> absolute char offset, clamped at buffer bounds.
pub fn position_to_char_offset(
    rope: &ropey::Rope,
    position: CqPosition,
    encoding: PositionEncoding,
) -> usize {
    if rope.len_chars() == 0 {
        return 0;
    }

    let line_index = (position.line as usize).min(rope.len_lines().saturating_sub(1));
    let line = rope.line(line_index);
    let col_chars = column_to_char_offset(line, position.character, encoding);
    let line_start = rope.line_to_char(line_index);
    (line_start + col_chars.min(line_len_chars(line))).min(rope.len_chars())
}

pub fn position_to_byte_offset(
    rope: &ropey::Rope,
    position: CqPosition,
    encoding: PositionEncoding,
) -> usize {
    rope.char_to_byte(position_to_char_offset(rope, position, encoding))
}

/// Absolute char offset -> protocol position in the given encoding.
pub fn char_offset_to_position(
    rope: &ropey::Rope,
    char_offset: usize,
    encoding: PositionEncoding,
) -> CqPosition {
    let char_offset = char_offset.min(rope.len_chars());
    let line = rope.char_to_line(char_offset);
    let line_start = rope.line_to_char(line);
    let col_chars = char_offset.saturating_sub(line_start);
    let line_slice = rope.line(line);
    let character = match encoding {
        PositionEncoding::Utf8 => line_slice
            .chars()
            .take(col_chars)
            .map(|ch| ch.len_utf8() as u32)
            .sum(),
        PositionEncoding::Utf16 => line_slice
            .chars()
            .take(col_chars)
            .map(|ch| ch.len_utf16() as u32)
            .sum(),
        PositionEncoding::Utf32 => col_chars as u32,
    };

    CqPosition {
        line: line as u32,
        character,
    }
}

/// Protocol range -> `(start, end)` char span. Empty and inverted ranges
/// yield `None`.
pub fn range_to_char_span(
    rope: &ropey::Rope,
    range: CqRange,
    encoding: PositionEncoding,
) -> Option<(usize, usize)> {
    let start = position_to_char_offset(rope, range.start, encoding);
    let end = position_to_char_offset(rope, range.end, encoding);
    if end <= start {
        return None;
    }
    Some((start, end))
}

#[cfg(test)]
#[path = "../../tests/unit/adapters/convert.rs"]
mod tests;
