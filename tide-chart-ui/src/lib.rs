//! Shared Dioxus components and D3.js bridge for tide chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js line chart via `js_sys::eval()`
//! - `fetch`: a [`tide_data::DataSource`] backed by the browser's `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, date inputs, status, chart container)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
