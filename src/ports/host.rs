//! Host-facing ports: the UI surface the bridge paints into and the
//! transport it sends protocol messages through.

use lsp_types::Url;

use super::proto::{CqRange, HierarchyKind, InlineLabel, LensItem, StatusText, StyleId};

/// Rendering surface implemented by the hosting UI layer. The bridge only
/// ever hands over opaque style ids and range lists; applying them to every
/// visible view of a document is the host's business.
pub trait HostSurface {
    fn apply_style(&mut self, uri: &Url, style: StyleId, ranges: &[CqRange]);
    fn clear_style(&mut self, uri: &Url, style: StyleId);

    /// Replaces the document's inline lens labels with `labels`, as one batch.
    fn apply_inline(&mut self, uri: &Url, labels: &[InlineLabel]);
    fn clear_inline(&mut self, uri: &Url);

    /// Default code-lens pipeline, used when inline rendering is disabled.
    fn code_lenses(&mut self, uri: &Url, lenses: Vec<LensItem>);

    /// The named hierarchy's forest changed; the hosting tree view should
    /// re-read it and re-render.
    fn hierarchy_changed(&mut self, kind: HierarchyKind);

    fn set_status(&mut self, status: Option<StatusText>);
}

/// Outbound half of the server connection. The bootstrap collaborator wires
/// this to the real process; tests substitute a recording fake.
pub trait Transport {
    fn send(&mut self, msg: lsp_server::Message);
}
