//! Inline code-lens rendering: anchor computation and per-document
//! batching.

use crate::ports::proto::{CqPosition, CqRange, InlineLabel, LensItem};

/// Column used to pin a label to the visual end of a line. Hosts clamp
/// positions past the line end, so any column no real line reaches works.
pub const LINE_END_COLUMN: u32 = u32::MAX;

/// Single-line lenses anchor at the end of their range. A lens spanning
/// several lines is anchored to the end of its first line so the label
/// cannot visually overlap the following lines.
pub fn anchor_position(range: CqRange) -> CqPosition {
    if range.start.line == range.end.line {
        range.end
    } else {
        CqPosition {
            line: range.start.line,
            character: LINE_END_COLUMN,
        }
    }
}

/// Converts decoded lenses into one batch of inline labels, ordered by
/// anchor position so repeated redraws are stable.
pub fn inline_labels(lenses: &[LensItem]) -> Vec<InlineLabel> {
    let mut labels: Vec<InlineLabel> = lenses
        .iter()
        .map(|lens| InlineLabel {
            position: anchor_position(lens.range),
            title: lens.title.clone(),
        })
        .collect();
    labels.sort_by_key(|label| (label.position.line, label.position.character));
    labels
}

#[cfg(test)]
#[path = "../../tests/unit/store/lens.rs"]
mod tests;
