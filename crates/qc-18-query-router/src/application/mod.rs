pub mod app_router;
mod dispatch;
pub mod router;

pub use app_router::AppQueryRouter;
pub use router::QueryRouter;
