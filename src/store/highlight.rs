//! Symbol-to-decoration mapping: category classification, deterministic
//! style selection, and the clear-then-apply redraw protocol.

use lsp_types::Url;
use rustc_hash::FxHashMap;

use crate::ports::host::HostSurface;
use crate::ports::proto::{
    CqRange, DecoratedSymbol, HighlightCategory, ParentKind, StorageClass, StyleDef, StyleId,
    SymbolKind,
};
use crate::ports::settings::HighlightSettings;

/// Total mapping from `(kind, parentKind, storage)` to a highlight category.
/// Kinds without a category produce no decoration at all.
pub fn classify(
    kind: SymbolKind,
    parent: ParentKind,
    storage: StorageClass,
) -> Option<HighlightCategory> {
    use HighlightCategory as C;

    match kind {
        SymbolKind::Class | SymbolKind::Struct => Some(C::Types),
        SymbolKind::Enum => Some(C::Enums),
        SymbolKind::TypeAlias => Some(C::TypeAliases),
        SymbolKind::TypeParameter => Some(C::TemplateParameters),
        SymbolKind::Function => Some(C::FreeStandingFunctions),
        SymbolKind::Method | SymbolKind::Constructor => Some(C::MemberFunctions),
        SymbolKind::StaticMethod => Some(C::StaticMemberFunctions),
        SymbolKind::Variable => Some(if parent == ParentKind::Func {
            C::FreeStandingVariables
        } else {
            C::GlobalVariables
        }),
        SymbolKind::Field => Some(if storage == StorageClass::Static {
            C::StaticMemberVariables
        } else {
            C::MemberVariables
        }),
        SymbolKind::Parameter => Some(C::Parameters),
        SymbolKind::EnumMember => Some(C::EnumConstants),
        SymbolKind::Namespace => Some(C::Namespaces),
        SymbolKind::Macro => Some(C::Macros),
        _ => None,
    }
}

/// Owns the per-category style lists and enabled flags. Style lists are
/// built once per (re)load; enabled flags are refreshed on every
/// highlighting notification so a runtime toggle is never stale.
pub struct DecorationRegistry {
    defs: Vec<StyleDef>,
    styles: FxHashMap<HighlightCategory, Vec<StyleId>>,
    enabled: FxHashMap<HighlightCategory, bool>,
}

impl DecorationRegistry {
    pub fn from_settings(settings: &HighlightSettings) -> Self {
        let mut defs = Vec::new();
        let mut styles = FxHashMap::default();
        let mut enabled = FxHashMap::default();

        for category in HighlightCategory::ALL {
            let style = settings.category(category);
            let mut list = Vec::with_capacity(style.colors.len());
            for color in &style.colors {
                let id = StyleId(defs.len() as u32);
                defs.push(StyleDef {
                    color: color.clone(),
                    underline: style.underline,
                    italic: style.italic,
                    bold: style.bold,
                });
                list.push(id);
            }
            styles.insert(category, list);
            enabled.insert(category, style.enabled);
        }

        Self {
            defs,
            styles,
            enabled,
        }
    }

    /// Re-reads only the enabled flags; the style lists stay as built.
    pub fn refresh_enabled(&mut self, settings: &HighlightSettings) {
        for category in HighlightCategory::ALL {
            self.enabled
                .insert(category, settings.category(category).enabled);
        }
    }

    pub fn is_enabled(&self, category: HighlightCategory) -> bool {
        self.enabled.get(&category).copied().unwrap_or(false)
    }

    pub fn style_def(&self, id: StyleId) -> Option<&StyleDef> {
        self.defs.get(id.0 as usize)
    }

    /// Every style id ever registered, across all categories.
    pub fn style_ids(&self) -> impl Iterator<Item = StyleId> + '_ {
        (0..self.defs.len() as u32).map(StyleId)
    }

    pub fn styles(&self, category: HighlightCategory) -> &[StyleId] {
        self.styles
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Deterministic style for a symbol: `stable_id` modulo the category's
    /// palette length. Two symbols may share a style; that is accepted.
    pub fn select_style(&self, symbol: &DecoratedSymbol) -> Option<StyleId> {
        let category = classify(symbol.kind, symbol.parent_kind, symbol.storage)?;
        if !self.is_enabled(category) {
            return None;
        }
        let list = self.styles.get(&category)?;
        if list.is_empty() {
            return None;
        }
        Some(list[symbol.stable_id as usize % list.len()])
    }

    /// Redraw protocol for one highlighting notification: clear every
    /// registered style on the document first (stale decorations from a
    /// prior notification must never survive), then apply each style's
    /// grouped ranges once.
    pub fn redraw(&self, uri: &Url, symbols: &[DecoratedSymbol], surface: &mut dyn HostSurface) {
        for id in self.style_ids() {
            surface.clear_style(uri, id);
        }

        let mut groups: FxHashMap<StyleId, Vec<CqRange>> = FxHashMap::default();
        for symbol in symbols {
            let Some(style) = self.select_style(symbol) else {
                continue;
            };
            groups
                .entry(style)
                .or_default()
                .extend(symbol.ranges.iter().copied());
        }

        let mut ordered: Vec<(StyleId, Vec<CqRange>)> = groups.into_iter().collect();
        ordered.sort_by_key(|(id, _)| *id);

        for (style, ranges) in ordered {
            surface.apply_style(uri, style, &ranges);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/highlight.rs"]
mod tests;
