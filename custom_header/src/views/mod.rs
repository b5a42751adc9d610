mod home;
mod not_found;

pub use home::{Home, HOME_DESCRIPTION, HOME_TITLE};
pub use not_found::NotFound;
