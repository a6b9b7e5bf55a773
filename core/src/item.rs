//! The keyed decoration builder.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use crate::feature::Feature;
use crate::target::Decorable;

/// A property-setter action stored in a decoration item.
///
/// Actions are invoked once per application and may be applied to many
/// targets, so they are shared closures over owned values.
pub type Action = Rc<dyn Fn(&mut dyn Decorable)>;

/// An immutable bundle of keyed decoration actions.
///
/// Each feature lives under a stable [`Feature`] key; inserting a second
/// action under the same key replaces the first. Every builder method
/// returns a new item and leaves the receiver unchanged, so items can be
/// shared and extended in divergent directions freely:
///
/// ```
/// use adorn_core::DecorationItem;
///
/// let base = DecorationItem::root();
/// let a = base.push(adorn_core::Feature::Alpha, |view| {
///     view.base_mut().alpha = 0.5;
/// });
/// assert!(base.is_empty());
/// assert_eq!(a.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct DecorationItem {
    actions: HashMap<Feature, Action>,
}

impl core::fmt::Debug for DecorationItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.actions.keys()).finish()
    }
}

impl DecorationItem {
    /// Returns the canonical empty item, the identity element for
    /// merging.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new item equal to this one with `key` set to `action`.
    ///
    /// An existing entry for `key` is replaced; the receiver is not
    /// modified.
    #[must_use]
    pub fn push(&self, key: Feature, action: impl Fn(&mut dyn Decorable) + 'static) -> Self {
        let mut next = self.clone();
        next.actions.insert(key, Rc::new(action));
        next
    }

    /// Returns a new item combining this one with `items`.
    ///
    /// Entries from later items override earlier entries for the same
    /// key; this item's entries are overridden by all of them.
    #[must_use]
    pub fn with<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut next = self.clone();
        for item in items {
            next.actions.extend(item.actions);
        }
        next
    }

    /// Combines a sequence of items, later entries winning per key.
    ///
    /// Equivalent to folding [`push`](Self::push) over every entry of
    /// every item in order, starting from [`root`](Self::root).
    #[must_use]
    pub fn merge<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::root().with(items)
    }

    /// Applies every stored action to `target`, each exactly once.
    ///
    /// The order in which keys are visited is unspecified; features must
    /// not depend on cross-key ordering. Application never fails: an
    /// action whose feature has no capability on this target declines
    /// silently.
    pub fn apply(&self, target: &mut dyn Decorable) {
        trace!(features = self.actions.len(), "applying decoration");
        for action in self.actions.values() {
            action(target);
        }
    }

    /// Returns the number of keyed actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns `true` if an action is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: Feature) -> bool {
        self.actions.contains_key(&key)
    }
}

/// Merges `items` and applies the result to `target`.
///
/// Later items override earlier ones per feature key before anything is
/// applied, so conflicting writes resolve to the last one rather than
/// running in sequence.
pub fn decorate<I>(target: &mut dyn Decorable, items: I)
where
    I: IntoIterator<Item = DecorationItem>,
{
    DecorationItem::merge(items).apply(target);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::target::ViewBase;

    #[derive(Debug, Default)]
    struct Plain {
        base: ViewBase,
    }

    impl Decorable for Plain {
        fn base(&self) -> &ViewBase {
            &self.base
        }
        fn base_mut(&mut self) -> &mut ViewBase {
            &mut self.base
        }
        fn as_any(&self) -> &dyn core::any::Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn core::any::Any {
            self
        }
    }

    fn tag(value: i64) -> impl Fn(&mut dyn Decorable) {
        move |view| view.base_mut().tag = value
    }

    #[test]
    fn push_replaces_entries_with_the_same_key() {
        let item = DecorationItem::root()
            .push(Feature::Tag, tag(1))
            .push(Feature::Tag, tag(2));
        assert_eq!(item.len(), 1);

        let mut view = Plain::default();
        item.apply(&mut view);
        assert_eq!(view.base.tag, 2);
    }

    #[test]
    fn merge_takes_the_rightmost_entry_per_key() {
        let a = DecorationItem::root().push(Feature::Tag, tag(1));
        let b = DecorationItem::root()
            .push(Feature::Tag, tag(2))
            .push(Feature::Alpha, |view| view.base_mut().alpha = 0.25);
        let c = DecorationItem::root().push(Feature::Tag, tag(3));

        // Grouping must not matter.
        let flat = DecorationItem::merge([a.clone(), b.clone(), c.clone()]);
        let nested = DecorationItem::merge([DecorationItem::merge([a, b]), c]);

        for item in [flat, nested] {
            let mut view = Plain::default();
            item.apply(&mut view);
            assert_eq!(view.base.tag, 3);
            assert!((view.base.alpha - 0.25).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn originals_are_unchanged_by_push_and_with() {
        let original = DecorationItem::root().push(Feature::Tag, tag(7));
        let extended = original.push(Feature::Hidden, |view| view.base_mut().hidden = true);
        let merged = original.with([extended.clone()]);

        assert_eq!(original.len(), 1);
        assert!(!original.contains(Feature::Hidden));
        assert_eq!(extended.len(), 2);
        assert_eq!(merged.len(), 2);

        // Reapplying the original must not carry the derived item's key.
        let mut view = Plain::default();
        original.apply(&mut view);
        assert!(!view.base.hidden);
        assert_eq!(view.base.tag, 7);
    }

    #[test]
    fn apply_invokes_each_action_exactly_once() {
        let count = Rc::new(Cell::new(0));
        let mut item = DecorationItem::root();
        for key in [Feature::Tag, Feature::Alpha, Feature::Hidden, Feature::Clips] {
            let count = count.clone();
            item = item.push(key, move |_| count.set(count.get() + 1));
        }

        let mut view = Plain::default();
        item.apply(&mut view);
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn merging_with_root_is_an_identity() {
        let item = DecorationItem::root().push(Feature::Tag, tag(5));
        let merged = DecorationItem::merge([DecorationItem::root(), item.clone()]);
        assert_eq!(merged.len(), item.len());

        let mut view = Plain::default();
        merged.apply(&mut view);
        assert_eq!(view.base.tag, 5);
    }

    #[test]
    fn state_keyed_features_are_distinct() {
        use crate::state::ControlState;

        let item = DecorationItem::root()
            .push(Feature::Title(ControlState::NORMAL), tag(1))
            .push(Feature::Title(ControlState::SELECTED), tag(2));
        assert_eq!(item.len(), 2);
    }
}
