//! Padding, border and divider glyphs.

use console::{pad_str_with, Alignment};
use serde::{Deserialize, Serialize};

use super::util::display_width;

/// The strings that frame every cell.
///
/// A body line renders each column as `padding + content + padding`,
/// separated by `border`. The divider under the header fills each column
/// with `divider`, uses `divider_padding` on both sides and `divider_border`
/// between columns.
///
/// ```text
///  Name | Bio
/// ------+-----
/// ```
///
/// # Example
///
/// ```rust
/// use elastic_table::TableStyle;
///
/// let style = TableStyle::default();
/// assert_eq!(style.margin(), 3);
///
/// let plain = TableStyle::plain();
/// assert_eq!(plain.border, " ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    pub padding: String,
    pub border: String,
    pub divider: char,
    pub divider_border: String,
    pub divider_padding: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            padding: " ".to_string(),
            border: "|".to_string(),
            divider: '-',
            divider_border: "+".to_string(),
            divider_padding: "-".to_string(),
        }
    }
}

impl TableStyle {
    /// ASCII pipes and dashes: `|`, `-`, `+`.
    pub fn classic() -> Self {
        Self::default()
    }

    /// Whitespace between columns; only the divider line is drawn.
    pub fn plain() -> Self {
        TableStyle {
            padding: " ".to_string(),
            border: " ".to_string(),
            divider: '-',
            divider_border: " ".to_string(),
            divider_padding: " ".to_string(),
        }
    }

    /// Light box-drawing characters: `│`, `─`, `┼`.
    pub fn unicode() -> Self {
        TableStyle {
            padding: " ".to_string(),
            border: "│".to_string(),
            divider: '─',
            divider_border: "┼".to_string(),
            divider_padding: "─".to_string(),
        }
    }

    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn border(mut self, border: impl Into<String>) -> Self {
        self.border = border.into();
        self
    }

    pub fn divider(mut self, divider: char) -> Self {
        self.divider = divider;
        self
    }

    pub fn divider_border(mut self, border: impl Into<String>) -> Self {
        self.divider_border = border.into();
        self
    }

    pub fn divider_padding(mut self, padding: impl Into<String>) -> Self {
        self.divider_padding = padding.into();
        self
    }

    /// Per-column overhead: two paddings plus one border.
    ///
    /// The last column ends the line instead of drawing a border, but it is
    /// charged the full margin all the same.
    pub fn margin(&self) -> usize {
        2 * display_width(&self.padding) + display_width(&self.border)
    }

    /// Divider padding and border resized to the display width of `padding`
    /// and `border`, so the divider line lines up with the body.
    ///
    /// Narrower glyphs are centred in the `divider` character; wider ones are
    /// cut.
    ///
    /// ```rust
    /// use elastic_table::TableStyle;
    ///
    /// let style = TableStyle::default().border(" | ").divider_border("+");
    /// assert_eq!(style.divider_frame(), ("-".to_string(), "-+-".to_string()));
    /// ```
    pub fn divider_frame(&self) -> (String, String) {
        let fit = |glyph: &str, body: &str| {
            pad_str_with(glyph, display_width(body), Alignment::Center, Some(""), self.divider)
                .into_owned()
        };
        (
            fit(&self.divider_padding, &self.padding),
            fit(&self.divider_border, &self.border),
        )
    }
}
