pub mod span_merge;
