//! Soroban trainer: an abacus bead model with the geometry, value
//! formatting and painting needed to drive it from a pointer.
//!
//! The model ([`Abacus`], [`Rod`], [`Bead`]) knows nothing about windows.
//! Front ends read it through [`paint::paint`] and feed clicks back through
//! [`Abacus::handle_click`], both using the abacus' [`Layout`].

pub mod abacus;
pub mod bead;
pub mod egui_canvas;
pub mod error;
pub mod layout;
pub mod paint;
pub mod rod;
pub mod settings;
pub mod theme;
pub mod value;

pub use abacus::{Abacus, BeadHit, PlaceValueMode};
pub use bead::{Bead, BeadKind};
pub use error::{AbacusError, Result};
pub use layout::{Layout, Point};
pub use paint::{Canvas, PaintOptions, SvgCanvas, paint, render_svg};
pub use rod::Rod;
pub use settings::AbacusSettings;
pub use theme::{Theme, ThemeName};
pub use value::Decimal;
