pub mod ideas;
pub mod init;
pub mod progress;
pub mod project;
pub mod recommend;
pub mod roadmap;
pub mod skill;
pub mod theme;
pub mod wizard;
