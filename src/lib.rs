//! `experience_panel` - hover-reveal detail panels for a terminal portfolio
//!
//! Renders the detail panel of a work or project entry into a cell canvas:
//! a header, a breadcrumb trail over nested sub-pages, and a body whose
//! text stays blurred until the pointer enters the card. The panel is pure
//! state plus drawing; a small raw-mode frontend drives it interactively.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::module_name_repetitions)] // Allow PanelOptions in panel etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::return_self_not_must_use)] // Builders are annotated where it matters

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod chip;
pub mod color;
pub mod content;
pub mod dataset;
pub mod error;
pub mod event;
pub mod hitgrid;
pub mod history;
pub mod hover;
pub mod identifier;
pub mod input;
pub mod options;
pub mod panel;
pub mod style;
pub mod terminal;

// Re-export core types at crate root
pub use cell::{Cell, CellContent};
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_callbacks, emit_event, emit_json, emit_log, set_event_callback,
    set_log_callback,
};
pub use style::{Style, TextAttributes};

// Re-export panel types
pub use chip::ChipButton;
pub use content::{Line, Navigator, PageContent, Span};
pub use dataset::{Catalog, Dataset, ExperienceEntry, Image, PageProducer, Themed};
pub use history::{NavigationHistory, TruncateMiss};
pub use hover::{
    AuxAction, Card, CardProps, CardTarget, Composed, ContentRenderer, HoverCompositor,
    HoverState, InjectedProps, ToggleHover,
};
pub use identifier::Identifier;
pub use options::{Palette, PanelOptions};
pub use panel::{
    ContentTarget, DescriptionPanel, ExperienceContent, PanelProps, PanelResponse, PanelTarget,
};

// Re-export frontend types
pub use hitgrid::{HitGrid, HitRegion};
pub use input::{Event, InputParser, Key, MouseButton, MouseEvent, MouseEventKind};
pub use terminal::{
    ColorScheme, EnvColorScheme, RawModeGuard, Terminal, enable_raw_mode, is_tty, terminal_size,
};
