use super::*;

fn pos(line: u32, character: u32) -> CqPosition {
    CqPosition { line, character }
}

fn lens(start: CqPosition, end: CqPosition, title: &str) -> LensItem {
    LensItem {
        range: CqRange { start, end },
        title: title.to_string(),
    }
}

#[test]
fn single_line_lens_anchors_at_range_end() {
    let anchor = anchor_position(CqRange {
        start: pos(3, 4),
        end: pos(3, 17),
    });
    assert_eq!(anchor, pos(3, 17));
}

#[test]
fn multi_line_lens_anchors_at_end_of_first_line() {
    let anchor = anchor_position(CqRange {
        start: pos(2, 4),
        end: pos(5, 1),
    });
    assert_eq!(anchor, pos(2, LINE_END_COLUMN));
}

#[test]
fn labels_are_sorted_by_anchor_position() {
    let labels = inline_labels(&[
        lens(pos(8, 0), pos(8, 3), "3 refs"),
        lens(pos(1, 10), pos(1, 14), "1 ref"),
        lens(pos(1, 2), pos(1, 6), "2 refs"),
    ]);

    let anchors: Vec<CqPosition> = labels.iter().map(|l| l.position).collect();
    assert_eq!(anchors, vec![pos(1, 6), pos(1, 14), pos(8, 3)]);
    assert_eq!(labels[0].title, "2 refs");
}

#[test]
fn multi_line_labels_sort_onto_their_first_line() {
    let labels = inline_labels(&[
        lens(pos(4, 0), pos(4, 5), "on four"),
        lens(pos(2, 0), pos(6, 1), "spans"),
    ]);
    assert_eq!(labels[0].position, pos(2, LINE_END_COLUMN));
    assert_eq!(labels[1].position, pos(4, 5));
}
