//! Control state sets and paired state values.

use bitflags::bitflags;

bitflags! {
    /// The state of a control, as a combination of flags.
    ///
    /// The empty set is the normal state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ControlState: u8 {
        /// The control is being pressed or tracked.
        const HIGHLIGHTED = 1 << 0;
        /// The control is selected.
        const SELECTED = 1 << 1;
        /// The control is disabled.
        const DISABLED = 1 << 2;
    }
}

impl ControlState {
    /// The normal (resting) state.
    pub const NORMAL: Self = Self::empty();
}

impl Default for ControlState {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A pair of values for the off and on variants of a two-state property.
///
/// Used by composite features that style both states of a control at
/// once, such as a button's normal and selected titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchState<T> {
    /// The value for the off (normal) state.
    pub off: T,
    /// The value for the on state.
    pub on: T,
}

impl<T> SwitchState<T> {
    /// Creates a pair from explicit off and on values.
    pub const fn new(off: T, on: T) -> Self {
        Self { off, on }
    }

    /// Creates a pair using the same value for both states.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            off: value.clone(),
            on: value,
        }
    }
}

impl<T> From<(T, T)> for SwitchState<T> {
    fn from((off, on): (T, T)) -> Self {
        Self::new(off, on)
    }
}

impl<T> From<[T; 2]> for SwitchState<T> {
    fn from([off, on]: [T; 2]) -> Self {
        Self::new(off, on)
    }
}
