//! Features targeting the input traits of editable text widgets.

use adorn_core::{Decorable, DecorationItem, Feature};
use adorn_text::{
    Autocapitalization, Autocorrection, InputTraits, KeyboardAppearance, KeyboardKind, ReturnKey,
    SpellChecking, TextArea, TextField,
};

// Fields and areas hold their traits in different widget types, so every
// input feature funnels through one probe.
fn with_traits(view: &mut dyn Decorable, set: impl FnOnce(&mut InputTraits)) {
    if let Some(element) = view.downcast_mut::<TextField>() {
        set(&mut element.traits);
    } else if let Some(element) = view.downcast_mut::<TextArea>() {
        set(&mut element.traits);
    }
}

/// Feature constructors for keyboard and input behavior. They apply to
/// text fields and text areas and decline on everything else.
pub trait InputFeatures: Sized {
    /// Sets the automatic capitalization behavior.
    #[must_use]
    fn autocapitalization(&self, value: Autocapitalization) -> DecorationItem;

    /// Sets the autocorrection behavior.
    #[must_use]
    fn autocorrection(&self, value: Autocorrection) -> DecorationItem;

    /// Sets the spell-checking behavior.
    #[must_use]
    fn spell_checking(&self, value: SpellChecking) -> DecorationItem;

    /// Sets the keyboard kind.
    #[must_use]
    fn keyboard(&self, value: KeyboardKind) -> DecorationItem;

    /// Sets the keyboard appearance.
    #[must_use]
    fn keyboard_appearance(&self, value: KeyboardAppearance) -> DecorationItem;

    /// Sets the return key label.
    #[must_use]
    fn return_key(&self, value: ReturnKey) -> DecorationItem;

    /// Sets whether the return key disables itself while the content is
    /// empty.
    #[must_use]
    fn return_key_automatically(&self, value: bool) -> DecorationItem;

    /// Sets whether entered text is obscured.
    #[must_use]
    fn secure_entry(&self, value: bool) -> DecorationItem;

    /// Obscures entered text.
    #[must_use]
    fn password(&self) -> DecorationItem {
        self.secure_entry(true)
    }

    /// Shows entered text in the clear.
    #[must_use]
    fn plaintext(&self) -> DecorationItem {
        self.secure_entry(false)
    }
}

impl InputFeatures for DecorationItem {
    fn autocapitalization(&self, value: Autocapitalization) -> DecorationItem {
        self.push(Feature::Autocapitalization, move |view| {
            with_traits(view, |traits| traits.autocapitalization = value);
        })
    }

    fn autocorrection(&self, value: Autocorrection) -> DecorationItem {
        self.push(Feature::Autocorrection, move |view| {
            with_traits(view, |traits| traits.autocorrection = value);
        })
    }

    fn spell_checking(&self, value: SpellChecking) -> DecorationItem {
        self.push(Feature::SpellChecking, move |view| {
            with_traits(view, |traits| traits.spell_checking = value);
        })
    }

    fn keyboard(&self, value: KeyboardKind) -> DecorationItem {
        self.push(Feature::Keyboard, move |view| {
            with_traits(view, |traits| traits.keyboard = value);
        })
    }

    fn keyboard_appearance(&self, value: KeyboardAppearance) -> DecorationItem {
        self.push(Feature::KeyboardAppearance, move |view| {
            with_traits(view, |traits| traits.keyboard_appearance = value);
        })
    }

    fn return_key(&self, value: ReturnKey) -> DecorationItem {
        self.push(Feature::ReturnKey, move |view| {
            with_traits(view, |traits| traits.return_key = value);
        })
    }

    fn return_key_automatically(&self, value: bool) -> DecorationItem {
        self.push(Feature::ReturnKeyAutomatically, move |view| {
            with_traits(view, |traits| traits.return_key_automatically = value);
        })
    }

    fn secure_entry(&self, value: bool) -> DecorationItem {
        self.push(Feature::SecureEntry, move |view| {
            with_traits(view, |traits| traits.secure_entry = value);
        })
    }
}
