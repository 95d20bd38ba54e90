//! Wire-shaped data contracts shared by adapters, stores and the host.

use lsp_types::Url;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionEncoding {
    Utf8,
    #[default]
    Utf16,
    Utf32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CqPosition {
    pub line: u32,
    pub character: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CqRange {
    pub start: CqPosition,
    pub end: CqPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CqLocation {
    pub uri: Url,
    pub range: CqRange,
}

/// Semantic symbol kinds as the server reports them: the standard LSP
/// numbering (0-26) plus the cquery extension values above 251.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Unknown,
    File,
    Module,
    Namespace,
    Package,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    String,
    Number,
    Boolean,
    Array,
    Object,
    Key,
    Null,
    EnumMember,
    Struct,
    Event,
    Operator,
    TypeParameter,
    TypeAlias,
    Parameter,
    StaticMethod,
    Macro,
}

/// Coarse kind of the symbol's lexical parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentKind {
    #[default]
    Invalid,
    File,
    Type,
    Func,
    Var,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageClass {
    #[default]
    Invalid,
    None,
    Extern,
    Static,
    PrivateExtern,
    Auto,
    Register,
}

/// One symbol from a semantic highlighting notification. Consumed exactly
/// once to compute decorations, never stored.
#[derive(Debug, Clone)]
pub struct DecoratedSymbol {
    pub stable_id: u32,
    pub parent_kind: ParentKind,
    pub kind: SymbolKind,
    pub is_type_member: bool,
    pub storage: StorageClass,
    pub ranges: Vec<CqRange>,
}

/// Indexing pipeline counters, received as a flat snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressCounters {
    pub index_request_count: u64,
    pub do_id_map_count: u64,
    pub load_previous_index_count: u64,
    pub on_id_mapped_count: u64,
    pub on_indexed_count: u64,
    pub active_threads: u64,
}

impl ProgressCounters {
    pub fn total(&self) -> u64 {
        self.index_request_count
            + self.do_id_map_count
            + self.load_previous_index_count
            + self.on_id_mapped_count
            + self.on_indexed_count
            + self.active_threads
    }
}

/// The fifteen fixed highlight categories, each owning an ordered style list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    Types,
    FreeStandingFunctions,
    MemberFunctions,
    StaticMemberFunctions,
    FreeStandingVariables,
    MemberVariables,
    StaticMemberVariables,
    GlobalVariables,
    Namespaces,
    Macros,
    Enums,
    EnumConstants,
    TypeAliases,
    Parameters,
    TemplateParameters,
}

impl HighlightCategory {
    pub const ALL: [HighlightCategory; 15] = [
        HighlightCategory::Types,
        HighlightCategory::FreeStandingFunctions,
        HighlightCategory::MemberFunctions,
        HighlightCategory::StaticMemberFunctions,
        HighlightCategory::FreeStandingVariables,
        HighlightCategory::MemberVariables,
        HighlightCategory::StaticMemberVariables,
        HighlightCategory::GlobalVariables,
        HighlightCategory::Namespaces,
        HighlightCategory::Macros,
        HighlightCategory::Enums,
        HighlightCategory::EnumConstants,
        HighlightCategory::TypeAliases,
        HighlightCategory::Parameters,
        HighlightCategory::TemplateParameters,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HighlightCategory::Types => "types",
            HighlightCategory::FreeStandingFunctions => "freeStandingFunctions",
            HighlightCategory::MemberFunctions => "memberFunctions",
            HighlightCategory::StaticMemberFunctions => "staticMemberFunctions",
            HighlightCategory::FreeStandingVariables => "freeStandingVariables",
            HighlightCategory::MemberVariables => "memberVariables",
            HighlightCategory::StaticMemberVariables => "staticMemberVariables",
            HighlightCategory::GlobalVariables => "globalVariables",
            HighlightCategory::Namespaces => "namespaces",
            HighlightCategory::Macros => "macros",
            HighlightCategory::Enums => "enums",
            HighlightCategory::EnumConstants => "enumConstants",
            HighlightCategory::TypeAliases => "typeAliases",
            HighlightCategory::Parameters => "parameters",
            HighlightCategory::TemplateParameters => "templateParameters",
        }
    }
}

/// Opaque handle into the registry's style table. The host realizes the
/// matching [`StyleDef`] however its rendering layer wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDef {
    pub color: String,
    pub underline: bool,
    pub italic: bool,
    pub bold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyKind {
    Call,
    Type,
}

/// A decoded code-lens item: source range plus the resolved command title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LensItem {
    pub range: CqRange,
    pub title: String,
}

/// A lens rendered as inline text at a single anchor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineLabel {
    pub position: CqPosition,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusText {
    pub text: String,
    pub tooltip: String,
}
