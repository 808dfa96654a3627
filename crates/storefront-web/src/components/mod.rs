//! UI Components

mod education_card;
mod footer;
mod navbar;
mod not_found;
mod product_card;

pub use education_card::EducationCard;
pub use footer::Footer;
pub use navbar::Navbar;
pub use not_found::{LookupFailure, NotFound};
pub use product_card::ProductCard;
