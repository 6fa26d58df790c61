pub mod battle;
pub mod damage;
pub mod events;
pub mod factory;
pub mod moves;
pub mod state;
