//! Layout widgets: plain containers, stacks and scroll views.

mod container;
mod scroll;
mod stack;

pub use container::{Container, container};
pub use scroll::{ScrollView, scroll};
pub use stack::{Distribution, Stack, StackAlignment, column, row, stack};
