//! Page behavior for the todo-list pages, compiled to WebAssembly.
//!
//! The crate binds three independent behaviors to server-rendered markup:
//! right-click reveals a link row's edit-links panel (any other click hides
//! it again), task checkboxes restyle their labels as completed, and
//! `openForm`/`closeForm` show and hide the login popup.
//!
//! All decisions are made by the browser-free [`engine::PageCore`]; the
//! `hydrate` feature adds the `dom` layer that resolves elements, installs
//! listeners and applies the core's [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Event reducer and the actions it emits |
//! | [`page`] | Presentational state (visibility, completion) |
//! | [`event`] | Page events resolved from DOM events |
//! | [`pairing`] | Link-row and checkbox/label pairing rules |
//! | [`config`] | Selectors and pairing strategy |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Default selectors and CSS values |
//! | `dom` | Browser binding and JS exports (feature `hydrate`) |

pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod engine;
pub mod error;
pub mod event;
pub mod page;
pub mod pairing;
