//! List the Unicode codepoints a font supports.
//!
//! The heavy lifting is done by [read-fonts]; this crate walks a font's
//! `cmap` subtables, unions the codepoints of the Unicode-encoded ones,
//! and formats the result for output.
//!
//! [read-fonts]: https://docs.rs/read-fonts
pub mod charset;
pub mod font;
pub mod hexlist;
