pub mod bands;
pub mod config;
pub mod search;
pub mod show;
pub mod sources;

pub use bands::show_bands;
pub use search::run_search;
pub use show::show_act;
pub use sources::Sources;
