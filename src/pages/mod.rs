pub mod home;
pub mod neighbor;
pub mod node;
pub mod not_found;
