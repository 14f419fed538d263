//! Domain types — proportion pair, per-side details, colors, options.

pub mod color;
pub mod detail;
pub mod options;
pub mod pair;

pub use color::{ParseColorError, Rgb};
pub use detail::ProportionDetail;
pub use options::{DisplayValue, KnobOptions};
pub use pair::ProportionPair;
