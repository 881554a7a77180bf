//! ROS `.msg` record model for `protoros`.
//!
//! Key components:
//! - [`primitive`] — the fixed catalog of built-in scalar type names
//! - [`parse_record`] — one `.msg` text → [`RecordDef`]
//! - [`Corpus`] — two-pass validation of a `.msg` directory tree, plus the
//!   structural matcher used to deduplicate generated records
//!
//! # Pipeline
//!
//! ```text
//! <pkg>/msg/<Name>.msg
//!   └─ RecordPath::from_path   – path layout → (package, name)
//!       └─ parse_record        – line grammar → RecordDef
//!           └─ Corpus::load_dir  – pass 1 collect, pass 2 verify closure
//!               └─ Corpus::find_match – structural dedup of new records
//! ```

mod ast;
mod corpus;
mod error;
mod layout;
mod lex;
mod parser;
pub mod primitive;

pub use ast::{ArrayLen, FieldSpec, RecordDef};
pub use corpus::{Corpus, ScanOutcome, SkipReason};
pub use error::{MsgError, PathLayoutError};
pub use layout::{MSG_DIR, MSG_EXTENSION, RecordPath};
pub use parser::{HEADER_TYPE, parse_record};
pub use primitive::{Primitive, is_primitive};
