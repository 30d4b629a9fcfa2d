/*
    Top-level
*/

//! Inspects how decimal literals are stored as IEEE-754 single and
//! double precision values.
//!
//! A literal is parsed the way `strtof`/`strtod` would parse it, and the
//! resulting value is taken apart: its bit pattern and fields, whether
//! printing it with maximal precision gives back the literal, machine
//! epsilon, the next value toward zero, and its `frexp` decomposition.
//!
//! ```
//! use float_inspect::inspect_literal;
//!
//! let report = inspect_literal("0.1", "double").unwrap().unwrap();
//! assert!(!report.round_trips());
//! assert_eq!(
//!     report.internal(),
//!     Some("0.1000000000000000055511151231257827021181583404541015625")
//! );
//!
//! // bare integers are not deduced as floating-point values
//! assert!(inspect_literal("42", "auto").unwrap().is_none());
//! ```

mod error;
mod float;
mod inspect;
mod options;
mod parse;
mod render;
mod round;
mod width;

pub use error::*;
pub use float::*;
pub use inspect::*;
pub use options::*;
pub use parse::*;
pub use render::*;
pub use width::*;

/// Parses and inspects `text` with the default options.
///
/// `selector` names the width: `single` (or `float`), `double`, or `auto`
/// (or `[deduce]`). Returns `Ok(None)` when the width is deduced and the
/// literal has no decimal point.
pub fn inspect_literal(text: &str, selector: &str) -> Result<Option<InspectionReport>> {
    inspect_literal_with(text, selector.parse()?, &InspectOptions::default())
}

/// Parses and inspects `text`.
pub fn inspect_literal_with(
    text: &str,
    selector: WidthSelector,
    options: &InspectOptions,
) -> Result<Option<InspectionReport>> {
    let literal = NumericLiteral::new(text, selector);
    Ok(parse_literal(&literal, options)?.map(|value| inspect_with(value, options)))
}
