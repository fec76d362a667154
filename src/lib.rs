pub mod api;
pub mod collection;
pub mod config;
pub mod humanize;
pub mod observability;
