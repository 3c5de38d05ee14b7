// Collections of zikr items and their lookup by key and title

pub mod loader;
pub mod registry;
pub mod zikr;
