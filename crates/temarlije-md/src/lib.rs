//! # Temarlije Markdown
//!
//! A small, total parser for the markdown subset used in generated study
//! material: `#`/`##`/`###` headings, `-`/`*` bullet lists, paragraphs, and
//! flat `**bold**`, `*italic*` and `_italic_` spans.
//!
//! Parsing never fails. Markup that does not resolve degrades to literal text.
//!
//! ## Quick Start
//!
//! ```rust
//! use temarlije_md::{html, parse, Block, Inline};
//!
//! let doc = parse("## Recap\n\nWater boils at **100 C** at sea level.");
//! assert_eq!(doc.blocks.len(), 2);
//!
//! if let Block::Paragraph(p) = &doc.blocks[1] {
//!     assert!(matches!(p.content[1], Inline::Bold(_)));
//! }
//!
//! let rendered = html::render(&doc);
//! assert!(rendered.contains("<strong>100 C</strong>"));
//! ```

pub mod ast;
pub mod html;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{Block, Delimiter, Document, Inline};
pub use parser::{parse, Blocks};
