//! Command implementations

mod install;
mod status;
mod uninstall;
mod update;

pub use install::install;
pub use status::status;
pub use uninstall::uninstall;
pub use update::update;
