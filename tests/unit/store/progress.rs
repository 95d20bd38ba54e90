use super::*;

fn counters(index: u64, threads: u64) -> ProgressCounters {
    ProgressCounters {
        index_request_count: index,
        active_threads: threads,
        ..ProgressCounters::default()
    }
}

#[test]
fn disabled_style_renders_nothing() {
    assert!(render(&counters(5, 2), ProgressStyle::Disabled).is_none());
}

#[test]
fn short_style_shows_idle_when_all_counters_are_zero() {
    let status = render(&ProgressCounters::default(), ProgressStyle::Short).unwrap();
    assert_eq!(status.text, "idle");
}

#[test]
fn short_style_shows_queue_over_total() {
    let status = render(&counters(1, 2), ProgressStyle::Short).unwrap();
    assert_eq!(status.text, "1|3 jobs");
}

#[test]
fn detailed_style_appends_every_counter() {
    let snapshot = ProgressCounters {
        index_request_count: 1,
        do_id_map_count: 2,
        load_previous_index_count: 3,
        on_id_mapped_count: 4,
        on_indexed_count: 5,
        active_threads: 6,
    };
    let status = render(&snapshot, ProgressStyle::Detailed).unwrap();

    assert!(status.text.starts_with("1|21 jobs ("));
    for field in [
        "indexRequestCount: 1",
        "doIdMapCount: 2",
        "loadPreviousIndexCount: 3",
        "onIdMappedCount: 4",
        "onIndexedCount: 5",
        "activeThreads: 6",
    ] {
        assert!(status.text.contains(field), "missing {}", field);
    }
}

#[test]
fn detailed_style_renders_even_when_idle() {
    let status = render(&ProgressCounters::default(), ProgressStyle::Detailed).unwrap();
    assert!(status.text.starts_with("0|0 jobs"));
}

#[test]
fn tooltip_lists_one_counter_per_line() {
    let status = render(&counters(1, 2), ProgressStyle::Short).unwrap();
    let lines: Vec<&str> = status.tooltip.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "indexRequestCount: 1");
    assert_eq!(lines[5], "activeThreads: 2");
}
