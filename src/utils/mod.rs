pub mod colors;
pub mod datetime;
pub mod path;
pub mod phone;
pub mod table;

pub use phone::mask_phone;
