//! Settings bundle consumed by the bridge, loaded from a JSON file and
//! refreshed via an explicit reload on the client.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::proto::HighlightCategory;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub highlight: HighlightSettings,
    pub code_lens: CodeLensSettings,
    pub progress: ProgressSettings,
    pub tree: TreeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryStyle {
    pub colors: Vec<String>,
    pub underline: bool,
    pub italic: bool,
    pub bold: bool,
    pub enabled: bool,
}

impl Default for CategoryStyle {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            underline: false,
            italic: false,
            bold: false,
            enabled: true,
        }
    }
}

impl CategoryStyle {
    fn colored(colors: &[&str]) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    fn underlined(colors: &[&str]) -> Self {
        Self {
            underline: true,
            ..Self::colored(colors)
        }
    }

    fn italic(colors: &[&str]) -> Self {
        Self {
            italic: true,
            ..Self::colored(colors)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightSettings {
    pub types: CategoryStyle,
    pub free_standing_functions: CategoryStyle,
    pub member_functions: CategoryStyle,
    pub static_member_functions: CategoryStyle,
    pub free_standing_variables: CategoryStyle,
    pub member_variables: CategoryStyle,
    pub static_member_variables: CategoryStyle,
    pub global_variables: CategoryStyle,
    pub namespaces: CategoryStyle,
    pub macros: CategoryStyle,
    pub enums: CategoryStyle,
    pub enum_constants: CategoryStyle,
    pub type_aliases: CategoryStyle,
    pub parameters: CategoryStyle,
    pub template_parameters: CategoryStyle,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            types: CategoryStyle::colored(&[
                "#d533bb", "#9b677f", "#e350b6", "#a04360", "#dd82bc", "#de3864",
            ]),
            free_standing_functions: CategoryStyle::colored(&[
                "#e5b124", "#927754", "#eb992c", "#e2bf8f", "#d67c17", "#88651e",
            ]),
            member_functions: CategoryStyle::colored(&[
                "#e4b953", "#a36526", "#b28927", "#d69855", "#c68e3d", "#a9784a",
            ]),
            static_member_functions: CategoryStyle::underlined(&[
                "#e4b953", "#a36526", "#b28927", "#d69855",
            ]),
            free_standing_variables: CategoryStyle::colored(&[
                "#587d87", "#26676f", "#9ca5b2", "#37927d", "#5e97a6", "#458383",
            ]),
            member_variables: CategoryStyle::colored(&[
                "#6988ba", "#547aa6", "#7b9bc9", "#436091", "#8aa3cc", "#5a7db0",
            ]),
            static_member_variables: CategoryStyle::underlined(&[
                "#6988ba", "#547aa6", "#7b9bc9", "#436091",
            ]),
            global_variables: CategoryStyle::italic(&["#587d87", "#26676f", "#37927d"]),
            namespaces: CategoryStyle::colored(&["#429921", "#58c1a4", "#5ec648", "#36815b"]),
            macros: CategoryStyle::colored(&["#e79e44", "#c9823b", "#d6713a"]),
            enums: CategoryStyle::colored(&["#508c6c", "#3d7358", "#62a483"]),
            enum_constants: CategoryStyle::colored(&["#508c6c", "#3d7358", "#62a483"]),
            type_aliases: CategoryStyle::colored(&["#d533bb", "#a04360", "#dd82bc"]),
            parameters: CategoryStyle::colored(&["#7f6e9e", "#9a89b4", "#6d5f8a"]),
            template_parameters: CategoryStyle::colored(&["#bb66cc", "#a35fb3", "#cc80dd"]),
        }
    }
}

impl HighlightSettings {
    pub fn category(&self, category: HighlightCategory) -> &CategoryStyle {
        match category {
            HighlightCategory::Types => &self.types,
            HighlightCategory::FreeStandingFunctions => &self.free_standing_functions,
            HighlightCategory::MemberFunctions => &self.member_functions,
            HighlightCategory::StaticMemberFunctions => &self.static_member_functions,
            HighlightCategory::FreeStandingVariables => &self.free_standing_variables,
            HighlightCategory::MemberVariables => &self.member_variables,
            HighlightCategory::StaticMemberVariables => &self.static_member_variables,
            HighlightCategory::GlobalVariables => &self.global_variables,
            HighlightCategory::Namespaces => &self.namespaces,
            HighlightCategory::Macros => &self.macros,
            HighlightCategory::Enums => &self.enums,
            HighlightCategory::EnumConstants => &self.enum_constants,
            HighlightCategory::TypeAliases => &self.type_aliases,
            HighlightCategory::Parameters => &self.parameters,
            HighlightCategory::TemplateParameters => &self.template_parameters,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeLensSettings {
    pub inline: bool,
}

impl Default for CodeLensSettings {
    fn default() -> Self {
        Self { inline: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStyle {
    Disabled,
    #[default]
    Short,
    Detailed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressSettings {
    pub style: ProgressStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeSettings {
    pub double_click_ms: u64,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            double_click_ms: 500,
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(String),
    EmptyPalette(&'static str),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {}", e),
            SettingsError::Parse(msg) => write!(f, "invalid settings: {}", msg),
            SettingsError::EmptyPalette(name) => write!(
                f,
                "highlight category `{}` is enabled but has no colors configured; \
                 add at least one color or disable the category",
                name
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(SettingsError::Io)?;
        let settings: Settings =
            serde_json::from_str(&text).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// An enabled category with an empty palette cannot decorate anything;
    /// surfaced as an actionable message instead of a silent no-op.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for category in HighlightCategory::ALL {
            let style = self.highlight.category(category);
            if style.enabled && style.colors.is_empty() {
                return Err(SettingsError::EmptyPalette(category.name()));
            }
        }
        Ok(())
    }
}
