pub mod flhash;
pub mod lookup_error;
pub mod nickname_table;

pub use lookup_error::LookupError;
pub use nickname_table::{ArchetypeResolver, NicknameTable};
