//! Page Components

mod article_detail;
mod education;
mod home;
mod marketplace;
mod product_detail;

pub use article_detail::ArticleDetailPage;
pub use education::EducationPage;
pub use home::HomePage;
pub use marketplace::MarketplacePage;
pub use product_detail::ProductDetailPage;
