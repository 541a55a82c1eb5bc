//! Curve Modeling Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod curves;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{ControlPoint, ControlPointSet, SelectionController, ACTIVE_RADIUS};
pub use curves::{CurveError, CurveKind, CurveOutput, CurveResult};
pub use shared::{EditorOptions, RenderScene};
