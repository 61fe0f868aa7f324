mod app;
mod caller;
mod state;

pub use app::create_app;
pub use caller::{bearer_token, request_culture, Caller};
pub use state::AppState;
