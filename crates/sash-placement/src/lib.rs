//! Window-placement memory.
//!
//! Captures a window's on-screen rectangle and show state when it closes
//! and reapplies them the next time it opens, clamping against the display
//! layout that exists at restore time. Windows and screens are reached
//! through trait seams, so the library carries no UI-framework dependency.
//!
//! # Quick Start
//!
//! ```rust
//! use sash_placement::{
//!     FrameWindow, PlacementMemory, PlacementOptions, StaticScreens,
//! };
//! use sash_common::Rect;
//!
//! let screens = StaticScreens::single(Rect {
//!     x: 0.0,
//!     y: 0.0,
//!     width: 1920.0,
//!     height: 1080.0,
//! });
//!
//! let mut memory = PlacementMemory::new();
//! memory.enable("main", PlacementOptions::default());
//!
//! let mut window = FrameWindow::new(Rect {
//!     x: 20.0,
//!     y: 10.0,
//!     width: 800.0,
//!     height: 600.0,
//! });
//! memory.save_on_close(&"main".into(), &window).unwrap();
//!
//! // Next launch: same key, geometry comes back.
//! memory.enable("main", PlacementOptions::default());
//! memory
//!     .restore_on_open(&"main".into(), &mut window, &screens)
//!     .unwrap();
//! ```

pub mod memory;
pub mod placement;
mod restore;
pub mod screens;
pub mod show_state;
pub mod window;

pub use memory::{PlacementMemory, PlacementOptions};
pub use placement::WindowPlacement;
pub use screens::{DisplayLayout, MonitorBounds, ScreenSource, StaticScreens};
pub use show_state::ShowState;
pub use window::{FrameWindow, PlacementWindow};
