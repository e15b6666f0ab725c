//! Line rendering is split by concern: colors, integers, timestamps, and the
//! line layout that stitches them together.

mod color;
mod line;
mod number;
mod timestamp;

pub use color::{
    Color, NO_COLOR_VAR, color, colors_enabled, detect_colors, level_color, level_label,
};
pub use line::{CallSite, LineFormatter, Record};
pub use number::{DEC_CAPACITY, HEX_CAPACITY, format_dec, format_hex};
pub use timestamp::{TIMESTAMP_LEN, render_timestamp};
