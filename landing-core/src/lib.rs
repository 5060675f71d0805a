//! View-state logic for the landing page runtime
//!
//! Everything here is target-independent:
//! - `landing-ui` (WASM) applies the computed view properties to the DOM
//! - native tests drive the same logic through `VirtualScheduler`
//!
//! No function in this crate touches the DOM directly.

pub mod animator;
pub mod config;
pub mod counter;
pub mod decor;
pub mod error;
pub mod form;
pub mod labels;
pub mod nav;
pub mod pointer;
pub mod schedule;
pub mod theme;

pub use animator::{AnimationKind, IntersectionEntry, ObservationSet, RevealStyle, Trigger};
pub use config::LandingConfig;
pub use counter::{CounterAnimation, CounterFrame, CounterTarget, CounterTask};
pub use decor::{start_mesh_pulse, start_page_intro, start_type_writer, Typewriter};
pub use error::LandingError;
pub use form::{ContactFormController, FormRecord, FormSurface, SubmitView};
pub use nav::{MenuState, SectionBounds};
pub use pointer::{CardRect, Tilt};
pub use schedule::{run_frames, FrameStep, FrameTask, Scheduler, TaskHandle, VirtualScheduler};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController, ThemeTarget};
