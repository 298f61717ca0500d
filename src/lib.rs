//! Conversion of conics (rational quadratic beziers) into chains of ordinary
//! quadratic beziers.

mod conic;
mod converter;
mod error;

pub use conic::{Conic, DEFAULT_QUADRATIC_COUNT};
pub use converter::{ConicConverter, DEFAULT_TOLERANCE};
pub use error::ConversionError;

pub use log::{AsLogger, Level, MessageCallback, RootLogger};
pub use util::math::{Bezier, Point2, Point2f, QuadraticBezier, Vec2, Vec2f};
