pub mod error;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

#[cfg(feature = "postgres")]
mod pg;
#[cfg(feature = "postgres")]
pub use pg::{PgStore, MIGRATOR};

pub use error::{StoreError, UniqueField};
pub use models::{Course, IrregularStudent, NewIrregularStudent, NewUser, Role, User};
pub use repo::RecordStore;
