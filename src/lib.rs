//! Declarative page scrolling for scroll containers
//!
//! A control declares one of eight page commands (`page-down`,
//! `page-inline-end`, ...) against a scroll container. This crate decides what
//! activating that control does:
//!
//! - [`command`] maps the keyword onto a physical axis and sign for the
//!   container's writing mode and direction
//! - [`scroll`] computes the one-page distance and lands on snap points
//! - [`boundary`] reports when a command can no longer move its target
//! - [`accessibility`] composes the control's announced name
//!
//! [`ScrollCommandEngine`] runs that pipeline against a single container
//! without mutating it. [`ScrollDocument`] keeps live containers and controls
//! by id, applies decided scrolls (optionally animated) and exposes
//! per-control presentation state.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use fastscroll::{Invoker, ScrollCommand, ScrollContainer, ScrollDocument, Size};
//!
//! let mut doc = ScrollDocument::default();
//! doc.insert_container(
//!     ScrollContainer::new("gallery", Size::new(300.0, 200.0), Size::new(1200.0, 200.0))
//!         .with_accessible_name("Gallery"),
//! );
//! doc.add_invoker(Invoker::new("next", ScrollCommand::PageInlineEnd, "gallery"));
//!
//! doc.invoke_control("next", Duration::ZERO);
//! let offset = doc.container("gallery").unwrap().scroll_offset();
//! assert!((offset.x - 270.0).abs() < 1e-3);
//! assert_eq!(doc.accessible_name("next").as_deref(), Some("Next page, Gallery"));
//! ```

pub mod accessibility;
pub mod animation;
pub mod boundary;
pub mod command;
pub mod config;
pub mod container;
pub mod document;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod invoker;
pub mod scenario;
pub mod scroll;
pub mod style;

pub use accessibility::{compose_name, ControlPresentation, NameLocale};
pub use animation::ScrollAnimation;
pub use boundary::BoundaryState;
pub use command::{resolve, ResolvedDirection, ScrollCommand};
pub use config::{EngineConfig, MultiAxisPolicy};
pub use container::{ScrollContainer, SnapArea, SnapPoint};
pub use document::ScrollDocument;
pub use engine::{InvokeOutcome, NoOpReason, ScrollCommandEngine, ScrollInstruction};
pub use error::{Error, Result};
pub use geometry::{Axis, EdgeOffsets, Point, Rect, Sign, Size};
pub use invoker::Invoker;
pub use scenario::Scenario;
pub use style::{Direction, ScrollBehavior, WritingContext, WritingMode};
