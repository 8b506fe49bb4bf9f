//! Layout, hit-testing and selection animation for a material-style tab
//! strip. Rendering is left to the host: the engine produces rectangles,
//! alphas and resolved colors per frame.

pub mod animation;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod layout;
pub mod selection;

pub use controller::{
    Frame, PointerButton, TabCollection, TabEvent, TabIntent, TabSelectorController,
    VecTabCollection,
};
pub use error::StripError;
pub use layout::{TabDescriptor, TextMeasure};
