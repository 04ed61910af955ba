pub mod error;
pub mod health;
pub mod item;
pub mod tags;
