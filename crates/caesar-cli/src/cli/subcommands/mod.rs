mod chat;
mod collections;
mod research;

pub use chat::ChatCommands;
pub use collections::CollectionCommands;
pub use research::{ResearchCommands, ResearchCreateArgs};
