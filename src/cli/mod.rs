//! CLI command implementations.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `recognize` | Recognize date/time expressions in a piece of text |
//! | `shapes` | List the recognized temporal shapes |
//!
//! # Example Usage
//!
//! ```bash
//! recognizers-datetime recognize "Within 3 years" \
//!     --reference 2018-03-14T00:00:00 --factory precise --format json
//!
//! recognizers-datetime shapes
//! ```

mod recognize;
mod shapes;

pub use recognize::{
    OutputFormat, RecognizeArgs, cmd_recognize, parse_reference, run_recognize, write_json,
    write_text,
};
pub use shapes::{ShapeInfo, cmd_shapes, get_all_shapes, write_shapes_json, write_shapes_table};
