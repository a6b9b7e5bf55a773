//! A plain view with no behavior beyond hosting children.

use core::any::Any;

use adorn_core::{Decorable, ViewBase};

/// A plain view.
///
/// Containers expose no capabilities beyond the common base, so they
/// are what widget-specific features silently decline on.
#[derive(Debug, Default)]
pub struct Container {
    /// Common view properties.
    pub base: ViewBase,
}

impl Container {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decorable for Container {
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

/// Creates an empty container.
#[must_use]
pub fn container() -> Container {
    Container::new()
}
