//! Highlighter palette configuration.
//!
//! A palette maps short keys (`"r"`, `"g"`, ...) to CSS colours. Each key becomes one
//! `paint-<key>` command that toggles a `<mark>` element, either tagged with a CSS class
//! (`hltr-<key>`) or carrying the colour inline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::MarkupSpec;

/// Visual style applied to highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlighterStyle {
    /// Plain background colour.
    #[default]
    None,
    /// Colour the text instead of the background.
    TextColor,
    /// Lower half highlight.
    Lowlight,
    /// Floating underline.
    Floating,
    /// Rounded background.
    Rounded,
    /// Marker-pen look.
    Realistic,
}

impl HighlighterStyle {
    /// All styles, in menu order.
    pub const ALL: [HighlighterStyle; 6] = [
        Self::None,
        Self::TextColor,
        Self::Lowlight,
        Self::Floating,
        Self::Rounded,
        Self::Realistic,
    ];

    /// CSS property an inline-styled highlight sets.
    pub fn css_property(self) -> &'static str {
        match self {
            Self::TextColor => "color",
            _ => "background-color",
        }
    }
}

/// How the colour is attached to the `<mark>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlighterMethod {
    /// `<mark class="hltr-<key>">`
    #[default]
    CssClasses,
    /// `<mark style="background-color:<colour>">`
    InlineStyles,
}

/// A toggle command derived from one palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightCommand {
    /// Stable command id (`paint-<key>`).
    pub id: String,
    /// Display name (the palette key).
    pub name: String,
    /// Delimiters the command toggles.
    pub spec: MarkupSpec,
}

/// Highlighter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlighterSettings {
    /// Visual style.
    pub highlighter_style: HighlighterStyle,
    /// Class or inline-style colouring.
    pub highlighter_methods: HighlighterMethod,
    /// Palette: key to CSS colour.
    pub highlighters: BTreeMap<String, String>,
    /// Display order of palette keys.
    pub highlighter_order: Vec<String>,
}

impl Default for HighlighterSettings {
    fn default() -> Self {
        let palette = [
            ("r", "#bf616a"),
            ("g", "#a3be8c"),
            ("p", "#b48ead"),
            ("b", "#81a1c1"),
            ("aa", "#a5756233"),
            ("o", "#d08770"),
        ];
        Self {
            highlighter_style: HighlighterStyle::None,
            highlighter_methods: HighlighterMethod::CssClasses,
            highlighters: palette
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            highlighter_order: palette.iter().map(|(k, _)| k.to_string()).collect(),
        }
    }
}

/// CSS class for a palette key.
pub fn css_class(key: &str) -> String {
    format!("hltr-{}", key.to_lowercase())
}

impl HighlighterSettings {
    /// Palette keys in display order.
    ///
    /// Keys listed in `highlighter_order` come first (skipping ones no longer in the palette),
    /// followed by any palette keys the order does not mention.
    pub fn ordered_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .highlighter_order
            .iter()
            .map(String::as_str)
            .filter(|k| self.highlighters.contains_key(*k))
            .collect();
        for key in self.highlighters.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        keys
    }

    /// Markup for one palette entry, or `None` if the key is unknown.
    pub fn spec_for(&self, key: &str) -> Option<MarkupSpec> {
        let colour = self.highlighters.get(key)?;
        let spec = match self.highlighter_methods {
            HighlighterMethod::CssClasses => MarkupSpec::mark_with_class(&css_class(key)),
            HighlighterMethod::InlineStyles => MarkupSpec::mark_with_style(&format!(
                "{}:{}",
                self.highlighter_style.css_property(),
                colour
            )),
        };
        Some(spec)
    }

    /// One toggle command per palette key, in display order.
    pub fn commands(&self) -> Vec<HighlightCommand> {
        self.ordered_keys()
            .into_iter()
            .filter_map(|key| {
                let spec = self.spec_for(key)?;
                Some(HighlightCommand {
                    id: format!("paint-{}", key.to_lowercase()),
                    name: key.to_string(),
                    spec,
                })
            })
            .collect()
    }

    /// Selectors the "clear colour" command erases.
    pub fn erase_selectors(&self) -> Vec<String> {
        vec!["mark".to_string()]
    }
}
