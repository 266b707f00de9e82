mod config_entry;

pub use config_entry::ConfigEntry;
