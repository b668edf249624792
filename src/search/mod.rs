pub mod debounce;
pub mod google_books;
pub mod query;

pub use debounce::{Debouncer, RequestSequencer, SettledSearch};
pub use query::SearchPlan;
