pub mod loader;
pub mod record;

pub use loader::{applications, load_inventory, APPLICATIONS_KEY};
pub use record::{describe, is_blank, value_text, ApplicationRecord, Field};
