//! Keyboard and input behavior shared by editable text widgets.

/// Automatic capitalization behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum Autocapitalization {
    /// Capitalize nothing.
    Never,
    /// Capitalize the first letter of each word.
    Words,
    /// Capitalize the first letter of each sentence (default).
    #[default]
    Sentences,
    /// Capitalize every character.
    AllCharacters,
}

/// Autocorrection behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum Autocorrection {
    /// Let the host decide (default).
    #[default]
    Default,
    /// Disable autocorrection.
    No,
    /// Enable autocorrection.
    Yes,
}

/// Spell-checking behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum SpellChecking {
    /// Let the host decide (default).
    #[default]
    Default,
    /// Disable spell checking.
    No,
    /// Enable spell checking.
    Yes,
}

/// The kind of keyboard presented for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum KeyboardKind {
    /// The standard keyboard (default).
    #[default]
    Default,
    /// ASCII-only input.
    AsciiCapable,
    /// Numbers and punctuation.
    NumbersAndPunctuation,
    /// URL entry.
    Url,
    /// A numeric pad.
    NumberPad,
    /// A phone pad.
    PhonePad,
    /// Email address entry.
    Email,
    /// Decimal number entry.
    Decimal,
}

/// The visual appearance of the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum KeyboardAppearance {
    /// The platform default (default).
    #[default]
    Default,
    /// A light keyboard.
    Light,
    /// A dark keyboard.
    Dark,
}

/// The label on the return key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum ReturnKey {
    /// The standard return key (default).
    #[default]
    Default,
    /// "Go".
    Go,
    /// "Next".
    Next,
    /// "Search".
    Search,
    /// "Send".
    Send,
    /// "Done".
    Done,
}

/// When a field's overlay view is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum OverlayMode {
    /// Never show the overlay (default).
    #[default]
    Never,
    /// Show only while editing.
    WhileEditing,
    /// Show except while editing.
    UnlessEditing,
    /// Always show.
    Always,
}

/// Input behavior shared by text fields and text areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct InputTraits {
    /// Automatic capitalization.
    pub autocapitalization: Autocapitalization,
    /// Autocorrection.
    pub autocorrection: Autocorrection,
    /// Spell checking.
    pub spell_checking: SpellChecking,
    /// The keyboard kind.
    pub keyboard: KeyboardKind,
    /// The keyboard appearance.
    pub keyboard_appearance: KeyboardAppearance,
    /// The return key label.
    pub return_key: ReturnKey,
    /// Whether the return key disables itself while the content is empty.
    pub return_key_automatically: bool,
    /// Whether entered text is obscured.
    pub secure_entry: bool,
}
