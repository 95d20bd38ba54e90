//! The bridge hub: issues hierarchy and code-lens requests, routes server
//! responses and notifications into the stores, and signals the host
//! surface. Single-threaded cooperative model: continuations run as
//! responses arrive, one at a time.

use lsp_server::{Message, Notification, Request, RequestId, Response};
use lsp_types::Url;
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::{json, Value};

use super::convert;
use crate::ports::host::{HostSurface, Transport};
use crate::ports::proto::{CqLocation, CqPosition, HierarchyKind};
use crate::ports::settings::Settings;
use crate::store::hierarchy::HierarchyProvider;
use crate::store::highlight::DecorationRegistry;
use crate::store::lens;
use crate::store::navigate::{ClickAction, DoubleClickGate};
use crate::store::progress;

pub const SEMANTIC_HIGHLIGHT_METHOD: &str = "$cquery/publishSemanticHighlighting";
pub const PROGRESS_METHOD: &str = "$cquery/progress";
pub const DID_VIEW_METHOD: &str = "$cquery/textDocumentDidView";
pub const CALL_HIERARCHY_METHOD: &str = "$cquery/callHierarchy";
pub const TYPE_HIERARCHY_METHOD: &str = "$cquery/typeHierarchy";
pub const CODE_LENS_METHOD: &str = "textDocument/codeLens";

/// Levels prefetched with a root query; expansions fetch one more.
const ROOT_LEVELS: u32 = 2;
const EXPAND_LEVELS: u32 = 1;

#[derive(Debug, Clone)]
enum PendingRequest {
    HierarchyRoots {
        kind: HierarchyKind,
        generation: u32,
    },
    HierarchyChildren {
        kind: HierarchyKind,
        node_id: String,
        generation: u32,
    },
    CodeLens {
        uri: Url,
    },
}

pub struct BridgeClient {
    settings: Settings,
    registry: DecorationRegistry,
    call_hierarchy: HierarchyProvider,
    type_hierarchy: HierarchyProvider,
    gate: DoubleClickGate,
    next_id: i32,
    pending: FxHashMap<RequestId, PendingRequest>,
    latest_lens_by_doc: FxHashMap<Url, i32>,
    visible: FxHashSet<Url>,
}

impl BridgeClient {
    pub fn new(settings: Settings) -> Self {
        let registry = DecorationRegistry::from_settings(&settings.highlight);
        let gate = DoubleClickGate::new(settings.tree.double_click_ms);
        Self {
            settings,
            registry,
            call_hierarchy: HierarchyProvider::new(HierarchyKind::Call),
            type_hierarchy: HierarchyProvider::new(HierarchyKind::Type),
            gate,
            next_id: 1,
            pending: FxHashMap::default(),
            latest_lens_by_doc: FxHashMap::default(),
            visible: FxHashSet::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &DecorationRegistry {
        &self.registry
    }

    pub fn hierarchy(&self, kind: HierarchyKind) -> &HierarchyProvider {
        match kind {
            HierarchyKind::Call => &self.call_hierarchy,
            HierarchyKind::Type => &self.type_hierarchy,
        }
    }

    fn hierarchy_mut(&mut self, kind: HierarchyKind) -> &mut HierarchyProvider {
        match kind {
            HierarchyKind::Call => &mut self.call_hierarchy,
            HierarchyKind::Type => &mut self.type_hierarchy,
        }
    }

    fn next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Explicit settings reload: rebuilds the style table and refreshes the
    /// click threshold. Inline labels are wiped when inline rendering was
    /// just switched off.
    pub fn reload_settings(&mut self, settings: Settings, surface: &mut dyn HostSurface) {
        let inline_was_on = self.settings.code_lens.inline;
        self.registry = DecorationRegistry::from_settings(&settings.highlight);
        self.gate.set_threshold_ms(settings.tree.double_click_ms);
        if inline_was_on && !settings.code_lens.inline {
            for uri in &self.visible {
                surface.clear_inline(uri);
            }
        }
        self.settings = settings;
    }

    /// Emits `$cquery/textDocumentDidView` for each document newly entering
    /// the visible set. No acknowledgment is expected.
    pub fn set_visible_documents(&mut self, uris: &[Url], transport: &mut dyn Transport) {
        let next: FxHashSet<Url> = uris.iter().cloned().collect();
        for uri in &next {
            if !self.visible.contains(uri) {
                transport.send(Message::Notification(Notification::new(
                    DID_VIEW_METHOD.to_string(),
                    json!({ "textDocumentUri": uri }),
                )));
            }
        }
        self.visible = next;
    }

    pub fn open_call_hierarchy(
        &mut self,
        uri: &Url,
        position: CqPosition,
        transport: &mut dyn Transport,
    ) {
        self.open_hierarchy(HierarchyKind::Call, uri, position, transport);
    }

    pub fn open_type_hierarchy(
        &mut self,
        uri: &Url,
        position: CqPosition,
        transport: &mut dyn Transport,
    ) {
        self.open_hierarchy(HierarchyKind::Type, uri, position, transport);
    }

    fn open_hierarchy(
        &mut self,
        kind: HierarchyKind,
        uri: &Url,
        position: CqPosition,
        transport: &mut dyn Transport,
    ) {
        let generation = self.hierarchy_mut(kind).begin_open();
        let id = self.next_id();
        self.pending.insert(
            RequestId::from(id),
            PendingRequest::HierarchyRoots { kind, generation },
        );

        let mut params = json!({
            "textDocument": { "uri": uri },
            "position": { "line": position.line, "character": position.character },
            "detailedName": false,
            "levels": ROOT_LEVELS,
        });
        merge_hierarchy_flags(&mut params, kind);

        transport.send(Message::Request(Request::new(
            RequestId::from(id),
            hierarchy_method(kind).to_string(),
            params,
        )));
    }

    /// Lazy expansion: issues a children request for an expandable node
    /// whose children have not been fetched yet.
    pub fn expand(&mut self, kind: HierarchyKind, node_id: &str, transport: &mut dyn Transport) {
        let generation = {
            let provider = self.hierarchy(kind);
            let Some(node) = provider.node(node_id) else {
                return;
            };
            if !node.has_children() || !node.children.is_empty() {
                return;
            }
            provider.generation()
        };

        let id = self.next_id();
        self.pending.insert(
            RequestId::from(id),
            PendingRequest::HierarchyChildren {
                kind,
                node_id: node_id.to_string(),
                generation,
            },
        );

        let mut params = json!({
            "id": node_id,
            "detailedName": false,
            "levels": EXPAND_LEVELS,
        });
        merge_hierarchy_flags(&mut params, kind);

        transport.send(Message::Request(Request::new(
            RequestId::from(id),
            hierarchy_method(kind).to_string(),
            params,
        )));
    }

    /// Clears the hierarchy and signals exactly once. In-flight requests
    /// are not cancelled; their responses arrive stale and are dropped.
    pub fn close_hierarchy(&mut self, kind: HierarchyKind, surface: &mut dyn HostSurface) {
        self.hierarchy_mut(kind).close();
        surface.hierarchy_changed(kind);
    }

    /// Tree navigation command entry point. Returns the location to jump to
    /// when the click completes a double-activation (or hits a childless
    /// node); the jump itself is the host's generic navigation primitive.
    pub fn handle_tree_click(
        &mut self,
        kind: HierarchyKind,
        node_id: &str,
        now_ms: u64,
    ) -> Option<CqLocation> {
        let node = self.hierarchy(kind).node(node_id)?;
        let has_children = node.has_children();
        let location = node.location.clone();

        match self.gate.handle_click(node_id, has_children, now_ms) {
            ClickAction::Navigate => location,
            ClickAction::Record => None,
        }
    }

    pub fn request_code_lens(&mut self, uri: &Url, transport: &mut dyn Transport) {
        let id = self.next_id();
        self.latest_lens_by_doc.insert(uri.clone(), id);
        self.pending
            .insert(RequestId::from(id), PendingRequest::CodeLens { uri: uri.clone() });

        let params = json!({ "textDocument": { "uri": uri } });
        transport.send(Message::Request(Request::new(
            RequestId::from(id),
            CODE_LENS_METHOD.to_string(),
            params,
        )));
    }

    pub fn handle_response(&mut self, resp: Response, surface: &mut dyn HostSurface) {
        let Some(kind) = self.pending.remove(&resp.id) else {
            return;
        };

        if let Some(err) = resp.error {
            tracing::warn!(code = err.code, message = %err.message, "bridge request failed");
            return;
        }
        let result = resp.result.unwrap_or(Value::Null);

        match kind {
            PendingRequest::HierarchyRoots { kind, generation } => {
                let forest = convert::hierarchy_forest_from_result(result);
                if self.hierarchy_mut(kind).apply_roots(generation, forest) {
                    surface.hierarchy_changed(kind);
                }
            }
            PendingRequest::HierarchyChildren {
                kind,
                node_id,
                generation,
            } => {
                let Some(children) = convert::hierarchy_children_from_result(result) else {
                    return;
                };
                if self
                    .hierarchy_mut(kind)
                    .apply_children(generation, &node_id, children)
                {
                    surface.hierarchy_changed(kind);
                }
            }
            PendingRequest::CodeLens { uri } => {
                let latest = self.latest_lens_by_doc.get(&uri).copied();
                if latest != request_id_as_i32(&resp.id) {
                    return;
                }

                let lenses = convert::lens_items_from_result(result);
                if self.settings.code_lens.inline {
                    // Inline mode: paint directly, hand nothing back to the
                    // default pipeline so nothing renders twice.
                    let labels = lens::inline_labels(&lenses);
                    surface.apply_inline(&uri, &labels);
                } else {
                    surface.code_lenses(&uri, lenses);
                }
            }
        }
    }

    pub fn handle_notification(&mut self, not: Notification, surface: &mut dyn HostSurface) {
        if not.method == SEMANTIC_HIGHLIGHT_METHOD {
            let Some((uri, symbols)) = convert::semantic_highlight_from_params(not.params) else {
                tracing::warn!("malformed semantic highlighting payload");
                return;
            };

            // Enabled flags may have been toggled since the styles were
            // built; re-read them on every notification.
            self.registry.refresh_enabled(&self.settings.highlight);

            if !self.visible.contains(&uri) {
                return;
            }
            self.registry.redraw(&uri, &symbols, surface);
        } else if not.method == PROGRESS_METHOD {
            let Some(counters) = convert::progress_from_params(not.params) else {
                tracing::warn!("malformed progress payload");
                return;
            };
            surface.set_status(progress::render(&counters, self.settings.progress.style));
        } else {
            tracing::debug!(method = %not.method, "unhandled notification");
        }
    }
}

fn hierarchy_method(kind: HierarchyKind) -> &'static str {
    match kind {
        HierarchyKind::Call => CALL_HIERARCHY_METHOD,
        HierarchyKind::Type => TYPE_HIERARCHY_METHOD,
    }
}

fn merge_hierarchy_flags(params: &mut Value, kind: HierarchyKind) {
    let Some(map) = params.as_object_mut() else {
        return;
    };
    match kind {
        HierarchyKind::Call => {
            map.insert("callee".to_string(), Value::Bool(false));
            map.insert("callType".to_string(), Value::from(1));
        }
        HierarchyKind::Type => {
            map.insert("derived".to_string(), Value::Bool(true));
            map.insert("qualified".to_string(), Value::Bool(false));
        }
    }
}

fn request_id_as_i32(id: &RequestId) -> Option<i32> {
    id.to_string().parse().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/adapters/client.rs"]
mod tests;
