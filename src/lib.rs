//! Draggable floating action button for the watchlist web client.
//!
//! The button distinguishes click, double-click, long-press and drag. A
//! long-press picks the button up; moving the pointer then re-anchors it to
//! the nearest viewport corner, kept a fixed margin away from every edge.
//!
//! The gesture logic lives in [`widget::WidgetCore`], which is driven by plain
//! values (timestamps, points, sizes) and returns [`widget::Action`]s, so it is
//! tested natively. With the `hydrate` feature, [`web::FabHost`] binds it to a
//! DOM element.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | Gesture state machine and the actions it emits |
//! | [`gesture`] | Gesture state, drag session, timer identities |
//! | [`position`] | Viewport-anchored position and its JSON/CSS forms |
//! | [`handlers`] | Outbound callbacks to the embedding application |
//! | [`geometry`] | Points, sizes, rectangles |
//! | [`config`] | Timing and margin settings |
//! | [`error`] | Error types |
//! | [`consts`] | Shared constants (timings, margin, fallback size) |
//! | `web` | DOM host (`hydrate` feature) |

pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod handlers;
pub mod position;
pub mod widget;

#[cfg(feature = "hydrate")]
pub mod web;
