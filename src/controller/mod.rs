pub mod auth;
pub mod generic;
pub mod ident;
pub mod poi;
pub mod poi_type;
pub mod track;
pub mod tracker;
pub mod user;
pub mod vehicle;
pub mod vehicle_type;
