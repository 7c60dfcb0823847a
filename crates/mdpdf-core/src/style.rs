//! Style dictionary and the two-level style resolver
//!
//! A style is a property bag understood by the layout engine (font size,
//! margins, color, decoration, ...). Styles live in a [`StyleDictionary`]
//! keyed by name; the converter refers to them either by name (`"head1"`)
//! or by spreading their properties onto a content node.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Style names used by the converter
pub const HEADING_STYLES: [&str; 6] = ["head1", "head2", "head3", "head4", "head5", "head6"];
pub const HRULE_STYLE: &str = "hrule";
pub const PARAGRAPH_STYLE: &str = "p";
pub const LIST_ITEM_STYLE: &str = "li";
pub const LINK_STYLE: &str = "a";

/// Style name → property bag
pub type StyleDictionary = BTreeMap<String, Style>;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    Center,
    Justify,
}

/// Text decoration line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextDecoration {
    Underline,
    LineThrough,
    Overline,
}

/// Margin in points, in any of the layout engine's three forms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Margin {
    /// Same margin on all four sides
    Uniform(f64),
    /// `[horizontal, vertical]`
    Symmetric([f64; 2]),
    /// `[left, top, right, bottom]`
    Sides([f64; 4]),
}

impl Margin {
    /// Expand a uniform margin to its four-sided form; other forms are kept.
    pub fn expand_uniform(self) -> Margin {
        match self {
            Margin::Uniform(m) => Margin::Sides([m, m, m, m]),
            other => other,
        }
    }
}

/// A style property bag
///
/// Known properties are typed; anything else the layout engine understands
/// (`characterSpacing`, `preserveLeadingSpaces`, ...) is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    /// Properties without a typed field
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Style {
    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        self == &Style::default()
    }

    /// Shallow merge: every property set in `overlay` wins, the rest is
    /// taken from `self`.
    pub fn merged(&self, overlay: &Style) -> Style {
        let mut extra = self.extra.clone();
        extra.extend(
            overlay
                .extra
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );

        Style {
            font: overlay.font.clone().or_else(|| self.font.clone()),
            font_size: overlay.font_size.or(self.font_size),
            line_height: overlay.line_height.or(self.line_height),
            bold: overlay.bold.or(self.bold),
            italics: overlay.italics.or(self.italics),
            alignment: overlay.alignment.or(self.alignment),
            color: overlay.color.clone().or_else(|| self.color.clone()),
            background: overlay
                .background
                .clone()
                .or_else(|| self.background.clone()),
            decoration: overlay.decoration.or(self.decoration),
            margin: overlay.margin.or(self.margin),
            extra,
        }
    }
}

/// Style name for a heading depth; `None` outside 1-6
pub fn heading_style(depth: u8) -> Option<&'static str> {
    match depth {
        1..=6 => Some(HEADING_STYLES[usize::from(depth) - 1]),
        _ => None,
    }
}

/// Merge `overlay` into `base`, two levels deep.
///
/// A style present in both is merged property by property (overlay wins);
/// a style only in the overlay is added as-is; a style only in the base is
/// kept unchanged.
pub fn resolve(base: &StyleDictionary, overlay: Option<&StyleDictionary>) -> StyleDictionary {
    let mut out = base.clone();
    let Some(overlay) = overlay else {
        return out;
    };

    for (name, style) in overlay {
        let merged = match out.get(name) {
            Some(current) => current.merged(style),
            None => style.clone(),
        };
        out.insert(name.clone(), merged);
    }

    out
}

/// The built-in style table
pub fn base_styles() -> StyleDictionary {
    let heading = |font_size: f64, margin: Option<[f64; 4]>| Style {
        font_size: Some(font_size),
        margin: margin.map(Margin::Sides),
        ..Default::default()
    };
    let body = || Style {
        line_height: Some(1.15),
        margin: Some(Margin::Symmetric([0.0, 5.0])),
        ..Default::default()
    };

    let mut styles = StyleDictionary::new();
    styles.insert("head1".into(), heading(24.0, Some([0.0, 20.0, 0.0, 16.0])));
    styles.insert("head2".into(), heading(18.0, Some([0.0, 14.0, 0.0, 10.0])));
    styles.insert("head3".into(), heading(16.0, Some([0.0, 10.0, 0.0, 8.0])));
    styles.insert("head4".into(), heading(14.0, Some([0.0, 6.0, 0.0, 2.0])));
    styles.insert("head5".into(), heading(12.0, Some([0.0, 4.0, 0.0, 0.0])));
    styles.insert("head6".into(), heading(14.0, None));
    styles.insert(
        HRULE_STYLE.into(),
        Style {
            margin: Some(Margin::Sides([0.0, 12.0, 0.0, 6.0])),
            color: Some("#CCCCCC".into()),
            ..Default::default()
        },
    );
    styles.insert(PARAGRAPH_STYLE.into(), body());
    styles.insert(LIST_ITEM_STYLE.into(), body());
    styles.insert(
        LINK_STYLE.into(),
        Style {
            color: Some("blue".into()),
            decoration: Some(TextDecoration::Underline),
            ..Default::default()
        },
    );
    styles
}
