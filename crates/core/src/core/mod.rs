pub mod constant;
mod name_allocator;
mod rename_map;
mod shorten_ident;

pub use name_allocator::NameAllocator;
pub use rename_map::{RenameEntry, RenameMap};
pub use shorten_ident::ShortenPolicy;
