//! Image handles and visual-effect styles.

/// A handle to a named image resource.
///
/// The decoration layer stores image handles without loading pixel data;
/// resolution is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    /// The resource name.
    pub name: String,
}

impl Image {
    /// Creates an image handle for the named resource.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<T: Into<String>> From<T> for Image {
    fn from(value: T) -> Self {
        Self::named(value)
    }
}

/// The material style of a blur effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum BlurStyle {
    /// An extra-light blur material.
    ExtraLight,
    /// A light blur material.
    Light,
    /// A dark blur material.
    Dark,
    /// The standard blur material (default).
    #[default]
    Regular,
    /// A prominent blur material.
    Prominent,
}
