//! Features targeting visual effect views.

use adorn_core::{BlurStyle, DecorationItem, Feature};
use adorn_media::BlurView;

/// Feature constructors for visual effects.
pub trait EffectFeatures: Sized {
    /// Sets the blur style. A custom hook intercepts it; otherwise only
    /// blur views respond.
    #[must_use]
    fn blur(&self, value: BlurStyle) -> DecorationItem;
}

impl EffectFeatures for DecorationItem {
    fn blur(&self, value: BlurStyle) -> DecorationItem {
        self.push(Feature::Blur, move |view| {
            if let Some(hook) = view.extend() {
                if hook.blur(value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<BlurView>() {
                element.style = Some(value);
            }
        })
    }
}
