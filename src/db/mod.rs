pub mod matches;
pub mod memory;
pub mod postgres;
pub mod request;
pub mod season;
pub mod section;
pub mod store;
pub mod volunteer;
pub mod volunteering_role;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::VolunteerStore;
