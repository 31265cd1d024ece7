use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Index into the legacy 56-entry Excel color palette.
///
/// Index `64` is Excel's "automatic" color: it has no palette entry and resolves from context
/// (black for borders and fonts).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexedColor(pub u16);

impl IndexedColor {
    pub const AUTOMATIC: IndexedColor = IndexedColor(64);
    pub const RED: IndexedColor = IndexedColor(10);
    pub const GREEN: IndexedColor = IndexedColor(17);
    pub const BLUE: IndexedColor = IndexedColor(12);

    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_automatic(self) -> bool {
        self.0 == Self::AUTOMATIC.0
    }
}

impl Default for IndexedColor {
    fn default() -> Self {
        Self::AUTOMATIC
    }
}

/// Border line style.
///
/// Variants are declared in Excel's numeric order (`None = 0` through `SlantDashDot = 13`), so the
/// derived ordering matches the file-format codes.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    None,
    Thin,
    Medium,
    Dashed,
    Dotted,
    Thick,
    Double,
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}

impl BorderStyle {
    pub const ALL: [BorderStyle; 14] = [
        BorderStyle::None,
        BorderStyle::Thin,
        BorderStyle::Medium,
        BorderStyle::Dashed,
        BorderStyle::Dotted,
        BorderStyle::Thick,
        BorderStyle::Double,
        BorderStyle::Hair,
        BorderStyle::MediumDashed,
        BorderStyle::DashDot,
        BorderStyle::MediumDashDot,
        BorderStyle::DashDotDot,
        BorderStyle::MediumDashDotDot,
        BorderStyle::SlantDashDot,
    ];

    /// Excel's numeric code for the style (as stored in BIFF `XF` records).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, BorderStyle::None)
    }
}

/// One side of a cell border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct BorderEdge {
    #[serde(default)]
    pub style: BorderStyle,
    #[serde(default)]
    pub color: IndexedColor,
}

/// Cell border formatting. Diagonal borders are not modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Border {
    #[serde(default)]
    pub top: BorderEdge,
    #[serde(default)]
    pub bottom: BorderEdge,
    #[serde(default)]
    pub left: BorderEdge,
    #[serde(default)]
    pub right: BorderEdge,
}

impl Border {
    pub fn is_default(&self) -> bool {
        *self == Border::default()
    }
}

/// Font formatting (subset).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<IndexedColor>,
}

/// Complete cell style (subset).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<IndexedColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

impl Style {
    /// The border of this style, defaulting to no borders.
    pub fn border_or_default(&self) -> Border {
        self.border.unwrap_or_default()
    }

    /// A copy of this style with `border` replaced. A default border is stored as `None` so the
    /// result dedupes against styles that never had a border.
    pub fn with_border(&self, border: Border) -> Style {
        Style {
            border: (!border.is_default()).then_some(border),
            ..self.clone()
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("style id {0} is not present in the style table")]
    UnknownStyleId(u32),
}

/// Deduplicated table of styles.
///
/// Cells store a `style_id` referencing this table. Style `0` is always the
/// default (empty) style.
#[derive(Clone, Debug, Serialize)]
pub struct StyleTable {
    pub styles: Vec<Style>,
    #[serde(skip)]
    index: HashMap<Style, u32>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleTable {
    pub fn new() -> Self {
        let mut table = Self {
            styles: vec![Style::default()],
            index: HashMap::new(),
        };
        table.rebuild_index();
        table
    }

    /// Insert (or reuse) a style, returning its ID.
    pub fn intern(&mut self, style: Style) -> u32 {
        if let Some(id) = self.index.get(&style) {
            return *id;
        }
        let id = self.styles.len() as u32;
        self.styles.push(style.clone());
        self.index.insert(style, id);
        id
    }

    pub fn get(&self, style_id: u32) -> Option<&Style> {
        self.styles.get(style_id as usize)
    }

    /// Like [`StyleTable::get`], but a missing id is an error.
    pub fn try_get(&self, style_id: u32) -> Result<&Style, StyleError> {
        self.get(style_id)
            .ok_or(StyleError::UnknownStyleId(style_id))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, style) in self.styles.iter().cloned().enumerate() {
            // Keep the first id for duplicated styles.
            self.index.entry(style).or_insert(i as u32);
        }
    }
}

impl<'de> Deserialize<'de> for StyleTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            #[serde(default)]
            styles: Vec<Style>,
        }

        let mut helper = Helper::deserialize(deserializer)?;
        if helper.styles.is_empty() {
            helper.styles.push(Style::default());
        }

        let mut table = StyleTable {
            styles: helper.styles,
            index: HashMap::new(),
        };
        table.rebuild_index();
        Ok(table)
    }
}
