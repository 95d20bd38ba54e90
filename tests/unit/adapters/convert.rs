use super::*;
use ropey::Rope;
use serde_json::json;

fn pos(line: u32, character: u32) -> CqPosition {
    CqPosition { line, character }
}

#[test]
fn symbol_kind_mapping_covers_extensions() {
    assert_eq!(symbol_kind_from_u32(5), SymbolKind::Class);
    assert_eq!(symbol_kind_from_u32(23), SymbolKind::Struct);
    assert_eq!(symbol_kind_from_u32(26), SymbolKind::TypeParameter);
    assert_eq!(symbol_kind_from_u32(252), SymbolKind::TypeAlias);
    assert_eq!(symbol_kind_from_u32(253), SymbolKind::Parameter);
    assert_eq!(symbol_kind_from_u32(254), SymbolKind::StaticMethod);
    assert_eq!(symbol_kind_from_u32(255), SymbolKind::Macro);
    assert_eq!(symbol_kind_from_u32(0), SymbolKind::Unknown);
    assert_eq!(symbol_kind_from_u32(200), SymbolKind::Unknown);
}

#[test]
fn parent_and_storage_mappings_default_to_invalid() {
    assert_eq!(parent_kind_from_u32(3), ParentKind::Func);
    assert_eq!(parent_kind_from_u32(99), ParentKind::Invalid);
    assert_eq!(storage_class_from_u32(3), StorageClass::Static);
    assert_eq!(storage_class_from_u32(99), StorageClass::Invalid);
}

#[test]
fn semantic_highlight_payload_decodes() {
    let params = json!({
        "uri": "file:///main.cc",
        "symbols": [{
            "stableId": 7,
            "parentKind": 3,
            "kind": 13,
            "isTypeMember": false,
            "storage": 1,
            "ranges": [
                { "start": { "line": 1, "character": 2 }, "end": { "line": 1, "character": 5 } }
            ]
        }]
    });

    let (uri, symbols) = semantic_highlight_from_params(params).unwrap();
    assert_eq!(uri.as_str(), "file:///main.cc");
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].stable_id, 7);
    assert_eq!(symbols[0].kind, SymbolKind::Variable);
    assert_eq!(symbols[0].parent_kind, ParentKind::Func);
    assert_eq!(symbols[0].ranges[0].start, pos(1, 2));
}

#[test]
fn semantic_highlight_without_uri_is_rejected() {
    assert!(semantic_highlight_from_params(json!({ "symbols": [] })).is_none());
}

#[test]
fn progress_payload_fills_missing_counters_with_zero() {
    let counters = progress_from_params(json!({ "indexRequestCount": 4 })).unwrap();
    assert_eq!(counters.index_request_count, 4);
    assert_eq!(counters.active_threads, 0);
    assert_eq!(counters.total(), 4);
}

#[test]
fn hierarchy_roots_accept_array_and_single_object() {
    let array = json!([
        { "id": "a", "name": "f()", "numChildren": 2, "children": [] },
        { "id": "b", "name": "g()", "numChildren": 0, "children": [] }
    ]);
    let forest = hierarchy_forest_from_result(array).unwrap();
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].id, "a");
    assert!(forest[0].has_children());

    let object = json!({ "id": "root", "name": "h()", "numChildren": 0, "children": [] });
    let forest = hierarchy_forest_from_result(object).unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].id, "root");
}

#[test]
fn hierarchy_null_result_means_nothing_to_show() {
    assert!(hierarchy_forest_from_result(json!(null)).is_none());
}

#[test]
fn numeric_node_ids_are_stringified() {
    let forest = hierarchy_forest_from_result(json!([
        { "id": 41, "name": "f()", "numChildren": 0, "children": [] }
    ]))
    .unwrap();
    assert_eq!(forest[0].id, "41");
}

#[test]
fn nodes_without_usable_ids_are_dropped() {
    let forest = hierarchy_forest_from_result(json!([
        { "id": null, "name": "bad", "numChildren": 0, "children": [] },
        { "id": "ok", "name": "good", "numChildren": 0, "children": [] }
    ]))
    .unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].id, "ok");
}

#[test]
fn children_decode_from_list_or_wrapping_node() {
    let list = json!([{ "id": "c1", "name": "x", "numChildren": 0, "children": [] }]);
    assert_eq!(hierarchy_children_from_result(list).unwrap().len(), 1);

    let wrapped = json!({
        "id": "parent",
        "name": "p",
        "numChildren": 1,
        "children": [{ "id": "c2", "name": "y", "numChildren": 0, "children": [] }]
    });
    let children = hierarchy_children_from_result(wrapped).unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, "c2");
}

#[test]
fn lens_items_keep_only_titled_commands() {
    let result = json!([
        {
            "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 3 } },
            "command": { "title": "2 refs", "command": "cquery.showReferences" }
        },
        {
            "range": { "start": { "line": 1, "character": 0 }, "end": { "line": 1, "character": 3 } },
            "command": { "title": "", "command": "cquery.showReferences" }
        },
        {
            "range": { "start": { "line": 2, "character": 0 }, "end": { "line": 2, "character": 3 } }
        }
    ]);

    let items = lens_items_from_result(result);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "2 refs");
    assert_eq!(items[0].range.start, pos(0, 0));
}

#[test]
fn malformed_lens_result_yields_no_items() {
    assert!(lens_items_from_result(json!("oops")).is_empty());
}

#[test]
fn column_mapping_honors_the_negotiated_encoding() {
    let rope = Rope::from_str("a\u{e9}\u{1f680}b\n");
    let line = rope.line(0);

    // "é" is 1 UTF-16 unit / 2 UTF-8 bytes, "🚀" is 2 units / 4 bytes.
    assert_eq!(column_to_char_offset(line, 4, PositionEncoding::Utf16), 3);
    assert_eq!(column_to_char_offset(line, 7, PositionEncoding::Utf8), 3);
    assert_eq!(column_to_char_offset(line, 3, PositionEncoding::Utf32), 3);
}

#[test]
fn column_inside_a_surrogate_pair_stops_before_it() {
    let rope = Rope::from_str("\u{1f680}x\n");
    let line = rope.line(0);
    assert_eq!(column_to_char_offset(line, 1, PositionEncoding::Utf16), 0);
    assert_eq!(column_to_char_offset(line, 2, PositionEncoding::Utf16), 1);
}

#[test]
fn columns_past_the_line_end_clamp() {
    let rope = Rope::from_str("abc\ndef\n");
    assert_eq!(
        position_to_char_offset(&rope, pos(0, 99), PositionEncoding::Utf16),
        3
    );
}

#[test]
fn lines_past_the_buffer_end_clamp() {
    let rope = Rope::from_str("abc\ndef");
    let offset = position_to_char_offset(&rope, pos(42, 1), PositionEncoding::Utf16);
    assert_eq!(offset, 5);
}

#[test]
fn position_round_trips_through_char_offset() {
    let rope = Rope::from_str("ab\nc\u{e9}d\n");
    let offset = position_to_char_offset(&rope, pos(1, 2), PositionEncoding::Utf16);
    assert_eq!(offset, 5);
    assert_eq!(
        char_offset_to_position(&rope, offset, PositionEncoding::Utf16),
        pos(1, 2)
    );
}

#[test]
fn byte_offsets_respect_multibyte_chars() {
    let rope = Rope::from_str("\u{e9}x\n");
    assert_eq!(
        position_to_byte_offset(&rope, pos(0, 1), PositionEncoding::Utf16),
        2
    );
}

#[test]
fn empty_and_inverted_ranges_have_no_span() {
    let rope = Rope::from_str("hello\n");
    let empty = CqRange {
        start: pos(0, 2),
        end: pos(0, 2),
    };
    assert!(range_to_char_span(&rope, empty, PositionEncoding::Utf16).is_none());

    let inverted = CqRange {
        start: pos(0, 4),
        end: pos(0, 1),
    };
    assert!(range_to_char_span(&rope, inverted, PositionEncoding::Utf16).is_none());

    let valid = CqRange {
        start: pos(0, 1),
        end: pos(0, 4),
    };
    assert_eq!(
        range_to_char_span(&rope, valid, PositionEncoding::Utf16),
        Some((1, 4))
    );
}
