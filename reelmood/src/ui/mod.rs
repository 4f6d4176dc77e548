//! Terminal presentation: theming, status messages and the result view.

pub mod output_format;
pub mod result_view;
pub mod theme;
