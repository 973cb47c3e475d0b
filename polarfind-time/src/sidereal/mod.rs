mod angle;
mod gmst;
mod lst;

pub use angle::SiderealAngle;
pub use gmst::GMST;
pub use lst::{local_sidereal_time, LST};
