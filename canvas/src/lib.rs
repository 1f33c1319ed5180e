//! Pan/zoom context canvas: an infinite board of reference items (images,
//! links, notes, shapes, frames) gathered as context for a generation prompt.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and builds
//! natively for headless hosts and tests. It owns the interaction model:
//! translating raw pointer and keyboard events into item mutations,
//! maintaining camera state for pan/zoom, hit-testing items, keeping an
//! undo/redo history, and painting the scene. The host layer wires DOM events
//! to the engine and reacts to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Canvas item types and the ordered item store |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Tools, input event types, and the gesture state machine |
//! | [`hit`] | Hit-testing against items |
//! | [`history`] | Undo/redo command stack |
//! | [`render`] | Display-list construction and `Canvas2D` painting |
//! | [`dither`] | Ordered-dither animated background |
//! | [`thought`] | Timed "thinking" status sequence |
//! | [`upload`] | Image bytes to `data:` URIs |
//! | [`config`] | Tunables with environment overrides |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric and color constants |

pub mod camera;
pub mod config;
pub mod consts;
pub mod dither;
pub mod doc;
pub mod engine;
pub mod error;
pub mod hit;
pub mod history;
pub mod input;
pub mod render;
pub mod thought;
pub mod upload;
