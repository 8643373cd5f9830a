//! DA 2062 extraction pipeline.
//!
//! The pipeline runs in fixed stages: classify lines, group them into item
//! records, run the field extractors over each group, score the result, and
//! aggregate everything into a [`Da2062Form`](crate::models::form::Da2062Form).

pub mod builder;
pub mod classifier;
pub mod grouper;
pub mod parser;
pub mod rules;
pub mod vocab;

pub use builder::ItemBuilder;
pub use classifier::{is_header_line, starts_new_item};
pub use grouper::{group_lines, LineGroup};
pub use parser::{Da2062Parser, FormParser};
