// Service exports
pub mod cache;
pub mod catalog;
pub mod recommendations;
pub mod remote;
pub mod session;

pub use cache::{CacheError, CacheKey, ResultCache};
pub use catalog::{Catalog, CatalogError};
pub use recommendations::{RecommendError, RecommendationService};
pub use remote::{RemoteRecommender, RemoteUnavailable};
pub use session::{DashboardSession, SubmitResult, ViewState};
