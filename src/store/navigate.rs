//! Double-activation detection for tree navigation. One instance is shared
//! across both hierarchy views: "last click" is a single process-wide
//! notion, by contract.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Navigate,
    Record,
}

#[derive(Debug)]
pub struct DoubleClickGate {
    threshold_ms: u64,
    last_id: Option<String>,
    last_ms: u64,
}

impl DoubleClickGate {
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            threshold_ms,
            last_id: None,
            last_ms: 0,
        }
    }

    pub fn set_threshold_ms(&mut self, threshold_ms: u64) {
        self.threshold_ms = threshold_ms;
    }

    /// Childless nodes always navigate directly. An expandable node
    /// navigates only on the second consecutive click on the same identity
    /// within the threshold; the timestamp is updated on every click, so a
    /// run of rapid clicks keeps navigating.
    pub fn handle_click(&mut self, id: &str, has_children: bool, now_ms: u64) -> ClickAction {
        if !has_children {
            self.last_id = Some(id.to_string());
            self.last_ms = now_ms;
            return ClickAction::Navigate;
        }

        if self.last_id.as_deref() != Some(id) {
            self.last_id = Some(id.to_string());
            self.last_ms = now_ms;
            return ClickAction::Record;
        }

        let elapsed = now_ms.saturating_sub(self.last_ms);
        self.last_ms = now_ms;
        if elapsed < self.threshold_ms {
            ClickAction::Navigate
        } else {
            ClickAction::Record
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/navigate.rs"]
mod tests;
