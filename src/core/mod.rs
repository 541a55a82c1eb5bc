//! Core-Domänentypen: Kontrollpunkte, Kontrollpunkt-Menge, Selektionsregeln.

pub mod control_point;
pub mod control_point_set;
pub mod selection;

pub use control_point::ControlPoint;
pub use control_point_set::ControlPointSet;
pub use selection::{SelectionController, ACTIVE_RADIUS};
