pub mod direction;
pub mod player;
pub mod rig;
