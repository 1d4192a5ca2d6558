pub mod brainstorm;
pub mod chat;
pub mod collections;
pub mod dispatch;
pub mod research;
pub mod shared;
