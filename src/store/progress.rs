//! Stateless transform of a job-queue counters snapshot into status text.
//! Each notification fully replaces the previous display.

use crate::ports::proto::{ProgressCounters, StatusText};
use crate::ports::settings::ProgressStyle;

pub fn render(counters: &ProgressCounters, style: ProgressStyle) -> Option<StatusText> {
    if style == ProgressStyle::Disabled {
        return None;
    }

    let total = counters.total();
    let text = if style == ProgressStyle::Short && total == 0 {
        "idle".to_string()
    } else {
        let mut text = format!("{}|{} jobs", counters.index_request_count, total);
        if style == ProgressStyle::Detailed {
            text.push_str(&format!(" ({})", detail(counters)));
        }
        text
    };

    Some(StatusText {
        text,
        tooltip: tooltip(counters),
    })
}

fn detail(counters: &ProgressCounters) -> String {
    format!(
        "indexRequestCount: {}, doIdMapCount: {}, loadPreviousIndexCount: {}, \
         onIdMappedCount: {}, onIndexedCount: {}, activeThreads: {}",
        counters.index_request_count,
        counters.do_id_map_count,
        counters.load_previous_index_count,
        counters.on_id_mapped_count,
        counters.on_indexed_count,
        counters.active_threads,
    )
}

fn tooltip(counters: &ProgressCounters) -> String {
    format!(
        "indexRequestCount: {}\ndoIdMapCount: {}\nloadPreviousIndexCount: {}\n\
         onIdMappedCount: {}\nonIndexedCount: {}\nactiveThreads: {}",
        counters.index_request_count,
        counters.do_id_map_count,
        counters.load_previous_index_count,
        counters.on_id_mapped_count,
        counters.on_indexed_count,
        counters.active_threads,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/store/progress.rs"]
mod tests;
