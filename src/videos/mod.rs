//! The built-in explainer videos.

pub(crate) mod background;
pub mod buero_netzwerk;
pub mod financial;
pub(crate) mod palette;
pub(crate) mod widgets;
