pub mod jobs;
pub mod manga;
pub mod provider;
