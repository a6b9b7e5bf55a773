//! A pressable button with per-state appearance tables.

use core::any::Any;
use std::collections::HashMap;

use adorn_color::Color;
use adorn_core::{
    AttributedText, ControlState, Decorable, EdgeInsets, Font, Image, LineBreakMode, ViewBase,
};

use crate::align::{HorizontalAlignment, VerticalAlignment};

/// A view that draws a state-dependent title and image and responds to
/// presses.
///
/// Appearance is stored per [`ControlState`]. A lookup for a state with
/// no entry falls back to [`ControlState::NORMAL`], which mirrors how
/// platform buttons resolve their current appearance.
#[derive(Debug)]
pub struct Button {
    /// Common view properties.
    pub base: ViewBase,
    titles: HashMap<ControlState, String>,
    title_colors: HashMap<ControlState, Color>,
    attributed_titles: HashMap<ControlState, AttributedText>,
    images: HashMap<ControlState, Image>,
    background_images: HashMap<ControlState, Image>,
    /// The font applied to the title label.
    pub title_font: Font,
    /// The title label's maximum line count; zero means unlimited.
    pub title_lines: u32,
    /// How an overflowing title is wrapped or truncated.
    pub break_mode: LineBreakMode,
    /// Padding around the whole content.
    pub content_insets: EdgeInsets,
    /// Extra padding around the title.
    pub title_insets: EdgeInsets,
    /// Extra padding around the image.
    pub image_insets: EdgeInsets,
    /// Vertical content placement.
    pub vertical_alignment: VerticalAlignment,
    /// Horizontal content placement.
    pub horizontal_alignment: HorizontalAlignment,
    /// Whether the button renders in its highlighted state.
    pub highlighted: bool,
    /// Whether the button renders in its selected state.
    pub selected: bool,
    /// Whether the button responds to presses.
    pub enabled: bool,
}

impl Button {
    /// Creates an empty button.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
            titles: HashMap::new(),
            title_colors: HashMap::new(),
            attributed_titles: HashMap::new(),
            images: HashMap::new(),
            background_images: HashMap::new(),
            title_font: Font::default(),
            title_lines: 1,
            break_mode: LineBreakMode::default(),
            content_insets: EdgeInsets::default(),
            title_insets: EdgeInsets::default(),
            image_insets: EdgeInsets::default(),
            vertical_alignment: VerticalAlignment::default(),
            horizontal_alignment: HorizontalAlignment::default(),
            highlighted: false,
            selected: false,
            enabled: true,
        }
    }

    /// Creates a button with a normal-state title.
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        let mut button = Self::new();
        button.set_title(title, ControlState::NORMAL);
        button
    }

    /// Sets the title for a state.
    pub fn set_title(&mut self, title: impl Into<String>, state: ControlState) {
        self.titles.insert(state, title.into());
    }

    /// Returns the title for a state, falling back to the normal state.
    #[must_use]
    pub fn title_for(&self, state: ControlState) -> Option<&str> {
        self.titles
            .get(&state)
            .or_else(|| self.titles.get(&ControlState::NORMAL))
            .map(String::as_str)
    }

    /// Sets the title color for a state.
    pub fn set_title_color(&mut self, color: Color, state: ControlState) {
        self.title_colors.insert(state, color);
    }

    /// Returns the title color for a state, falling back to the normal
    /// state.
    #[must_use]
    pub fn title_color_for(&self, state: ControlState) -> Option<Color> {
        self.title_colors
            .get(&state)
            .or_else(|| self.title_colors.get(&ControlState::NORMAL))
            .copied()
    }

    /// Sets the attributed title for a state.
    pub fn set_attributed_title(&mut self, title: AttributedText, state: ControlState) {
        self.attributed_titles.insert(state, title);
    }

    /// Returns the attributed title for a state, falling back to the
    /// normal state.
    #[must_use]
    pub fn attributed_title_for(&self, state: ControlState) -> Option<&AttributedText> {
        self.attributed_titles
            .get(&state)
            .or_else(|| self.attributed_titles.get(&ControlState::NORMAL))
    }

    /// Sets the foreground image for a state.
    pub fn set_image(&mut self, image: Image, state: ControlState) {
        self.images.insert(state, image);
    }

    /// Returns the foreground image for a state, falling back to the
    /// normal state.
    #[must_use]
    pub fn image_for(&self, state: ControlState) -> Option<&Image> {
        self.images
            .get(&state)
            .or_else(|| self.images.get(&ControlState::NORMAL))
    }

    /// Sets the background image for a state.
    pub fn set_background_image(&mut self, image: Image, state: ControlState) {
        self.background_images.insert(state, image);
    }

    /// Returns the background image for a state, falling back to the
    /// normal state.
    #[must_use]
    pub fn background_image_for(&self, state: ControlState) -> Option<&Image> {
        self.background_images
            .get(&state)
            .or_else(|| self.background_images.get(&ControlState::NORMAL))
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorable for Button {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Creates a button with a normal-state title.
#[must_use]
pub fn button(title: impl Into<String>) -> Button {
    Button::with_title(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_lookups_fall_back_to_the_normal_entry() {
        let mut button = Button::with_title("Send");
        button.set_title("Sending", ControlState::DISABLED);

        assert_eq!(button.title_for(ControlState::NORMAL), Some("Send"));
        assert_eq!(button.title_for(ControlState::DISABLED), Some("Sending"));
        assert_eq!(button.title_for(ControlState::HIGHLIGHTED), Some("Send"));
        assert_eq!(button.title_color_for(ControlState::SELECTED), None);
    }
}
