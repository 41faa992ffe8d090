pub mod config;
pub mod data;
pub mod experience;
pub mod handlers;
pub mod links;
pub mod models;
pub mod projects;
pub mod skills;
pub mod state;
pub mod theme;

pub use handlers::build_router;
pub use state::AppState;
