pub mod assessment;
pub mod event;
pub mod event_type;
pub mod zoning;
