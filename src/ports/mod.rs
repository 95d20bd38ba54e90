//! Ports: data contracts + the traits the hosting UI layer implements.

pub mod host;
pub mod proto;
pub mod settings;

pub use host::{HostSurface, Transport};
pub use proto::{
    CqLocation, CqPosition, CqRange, DecoratedSymbol, HierarchyKind, HighlightCategory,
    InlineLabel, LensItem, ParentKind, PositionEncoding, ProgressCounters, StatusText,
    StorageClass, StyleDef, StyleId, SymbolKind,
};
pub use settings::{
    CategoryStyle, CodeLensSettings, HighlightSettings, ProgressSettings, ProgressStyle, Settings,
    SettingsError, TreeSettings,
};
