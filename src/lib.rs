//! **tilerc**: the configuration document of a tiling window manager.
//!
//! The whole configuration (hotkeys, workspace groups, layouts, per-screen
//! status bars, floating rules, mouse bindings and behaviour flags) is one
//! immutable [`Document`](document::Document) produced by
//! [`declare`](document::declare).  The host runtime imports it at startup
//! and replaces it wholesale on reload.
//!
//! # Architecture
//!
//! The document never acts on its own.  Two traits stand between it and the
//! outside world:
//!
//! * [`traits::Spawner`] starts external programs (launchers, autostart
//!   scripts) without waiting for them.
//! * [`traits::Host`] evaluates the lazy commands bound to keys, so key
//!   dispatch can be tested against a double instead of a live session.
//!
//! [`spawn::ProcessSpawner`] is the real spawner; the window-manager runtime
//! itself is out of scope.

pub mod bar;
pub mod command;
pub mod config;
pub mod document;
pub mod group;
pub mod hooks;
pub mod keys;
pub mod layout;
pub mod rules;
pub mod spawn;
pub mod theme;
pub mod traits;
pub mod widget;
