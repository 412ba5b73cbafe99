pub mod file_list;
pub mod menu_bar;
pub mod status;
pub mod workspace;
