//! Media widgets: image views, blur effect views and web views.

mod blur;
mod image;
mod web;

pub use blur::{BlurView, blur};
pub use image::{ImageView, image};
pub use web::{WebView, web};
