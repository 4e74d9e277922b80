pub mod duration;
pub mod limits;
pub mod period;
pub mod surcharges;
