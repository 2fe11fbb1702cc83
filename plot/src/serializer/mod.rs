//! Serializers for charts.
//!
//! - **JSON** ([`json`]): a structural dump of the chart model, suitable for
//!   inspecting a chart or feeding it to an external plotting tool.

pub mod json;
