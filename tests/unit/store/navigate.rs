use super::*;

#[test]
fn childless_node_navigates_immediately() {
    let mut gate = DoubleClickGate::new(400);
    assert_eq!(gate.handle_click("leaf", false, 0), ClickAction::Navigate);
    assert_eq!(gate.handle_click("leaf", false, 10), ClickAction::Navigate);
}

#[test]
fn expandable_node_needs_a_second_click_within_threshold() {
    let mut gate = DoubleClickGate::new(400);

    assert_eq!(gate.handle_click("a", true, 0), ClickAction::Record);
    assert_eq!(gate.handle_click("a", true, 200), ClickAction::Navigate);
    // Timestamp advanced on the second click, so a rapid third click still
    // falls inside the window.
    assert_eq!(gate.handle_click("a", true, 250), ClickAction::Navigate);
    assert_eq!(gate.handle_click("b", true, 260), ClickAction::Record);
}

#[test]
fn slow_second_click_only_records() {
    let mut gate = DoubleClickGate::new(400);
    assert_eq!(gate.handle_click("a", true, 0), ClickAction::Record);
    assert_eq!(gate.handle_click("a", true, 400), ClickAction::Record);
    assert_eq!(gate.handle_click("a", true, 900), ClickAction::Record);
}

#[test]
fn alternating_expandable_nodes_never_navigate() {
    let mut gate = DoubleClickGate::new(400);
    assert_eq!(gate.handle_click("a", true, 0), ClickAction::Record);
    assert_eq!(gate.handle_click("b", true, 50), ClickAction::Record);
    assert_eq!(gate.handle_click("a", true, 100), ClickAction::Record);
    assert_eq!(gate.handle_click("b", true, 150), ClickAction::Record);
}

#[test]
fn childless_click_resets_the_pending_identity() {
    let mut gate = DoubleClickGate::new(400);
    assert_eq!(gate.handle_click("a", true, 0), ClickAction::Record);
    assert_eq!(gate.handle_click("leaf", false, 50), ClickAction::Navigate);
    // "a" is no longer the last-clicked identity.
    assert_eq!(gate.handle_click("a", true, 100), ClickAction::Record);
}

#[test]
fn threshold_can_be_changed_at_runtime() {
    let mut gate = DoubleClickGate::new(400);
    gate.set_threshold_ms(100);
    assert_eq!(gate.handle_click("a", true, 0), ClickAction::Record);
    assert_eq!(gate.handle_click("a", true, 150), ClickAction::Record);
    assert_eq!(gate.handle_click("a", true, 200), ClickAction::Navigate);
}

#[test]
fn clock_going_backwards_still_counts_as_fast() {
    let mut gate = DoubleClickGate::new(400);
    assert_eq!(gate.handle_click("a", true, 1000), ClickAction::Record);
    assert_eq!(gate.handle_click("a", true, 900), ClickAction::Navigate);
}
