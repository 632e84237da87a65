//! Flutter-facing bridge for weightlog core.

pub mod api;
