//! # nirmal-server
//!
//! HTTP front end for the Nirmal complaint service.
//!
//! ## Endpoints
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | POST | `/signup` | Register a citizen or officer |
//! | POST | `/login` | Check credentials |
//! | POST | `/complaint` | Submit a complaint |
//! | GET | `/complaints` | List all complaints |
//! | PUT | `/complaint/{id}` | Mark a complaint completed |
//! | DELETE | `/complaint/{id}` | Delete a complaint |
//! | GET | `/healthz` | Liveness check |
//!
//! Any other GET falls through to the embedded `login.html` / `index.html`
//! pages.

pub mod assets;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::Server;
pub use state::AppState;
