pub mod firms;
pub mod jobber_types;
pub mod jobbers;
pub mod locations;
pub mod material_details;
pub mod material_shades;
pub mod material_types;
pub mod materials;
pub mod parties;
pub mod users;
