pub mod colors;
pub mod config;
pub mod logging;
pub mod spotify;

pub use colors::ColorsConfig;
pub use config::Config;
pub use logging::LoggingConfig;
pub use spotify::SpotifyConfig;
