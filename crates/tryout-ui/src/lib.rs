//! Leptos 0.7 CSR frontend for the tryout quiz platform
//!
//! Browse, filter, create, edit and delete tryouts and their true/false
//! questions against the tryout REST API.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Type-safe routing with leptos_router
//! - Screen state lives in `tryout-core` containers held in signals
//! - REST calls through `gloo-net`
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions and navigation
//! - `api`: `gloo-net` transport and its context
//! - `pages`: Top-level page components
//! - `components`: Reusable UI components
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod router;

#[cfg(test)]
mod tests;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
