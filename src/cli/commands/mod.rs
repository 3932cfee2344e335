mod check_links;
mod update;

pub use check_links::handle_check_links_command;
pub use update::handle_update_command;
