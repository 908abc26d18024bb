//! Polygon brush drawing core.
//!
//! Paint a polygon region on a map by dragging a resizable circular brush:
//! the brush trail merges into a single accumulated polygon via boolean
//! union. The crate owns the interaction logic only — pointer state machine,
//! brush sizing, incremental merge — and consumes boolean geometry and
//! normalized input from the host.
//!
//! Processing is single-threaded and synchronous: each event is fully
//! handled before the next is accepted, in arrival order.

pub mod brush;
pub mod conditions;
pub mod config;
pub mod features;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod manager;
pub mod merge;
pub mod polygon_brush;
pub mod session;

pub use brush::{BrushRegion, RadiusController};
pub use config::{BrushConfig, BRUSH_RESIZE_STEP, DEFAULT_BRUSH_RADIUS, MIN_BRUSH_SIZE};
pub use features::{Feature, FeatureCollection, FeatureSink};
pub use geometry::{BooleanGeometry, GeoBackend, GeometryError, Ring};
pub use input::{EventKind, InputEvent, Modifiers, PointerKind};
pub use interaction::{BrushError, BrushStrategy, SketchInteraction};
pub use manager::InteractionManager;
pub use merge::RegionMerger;
pub use polygon_brush::PolygonBrush;
pub use session::{DrawEvent, DrawEventKind, DrawSession, SessionState, SketchPolygon};
