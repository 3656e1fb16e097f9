//! brush-tooltip library
//!
//! Attaches hover and drag tooltips to a one-dimensional range-selection
//! brush. The brush and its sub-elements publish pointer and lifecycle
//! events; a [`tooltip::TooltipController`] listens to them and drives a
//! floating label's text, position and visibility.

pub mod app;
pub mod brush;
pub mod config;
pub mod error;
pub mod tooltip;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use error::TooltipError;
