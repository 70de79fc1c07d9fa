pub mod matches;
pub mod summary;

pub use matches::{
    generate_requests_for_match_handler, generate_requests_handler, get_match_requests_handler,
};
pub use summary::get_summary_handler;
