//! Content alignment within a control's bounds.

/// Vertical placement of a control's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum VerticalAlignment {
    /// Center vertically (default).
    #[default]
    Center,
    /// Pin to the top edge.
    Top,
    /// Pin to the bottom edge.
    Bottom,
    /// Stretch to fill the height.
    Fill,
}

/// Horizontal placement of a control's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum HorizontalAlignment {
    /// Center horizontally (default).
    #[default]
    Center,
    /// Pin to the leading edge.
    Leading,
    /// Pin to the trailing edge.
    Trailing,
    /// Stretch to fill the width.
    Fill,
}
