// crates/profile/src/application/mod.rs

pub mod common;
pub mod ports;
pub mod profile_settings;
pub mod saga;
pub mod workers;

pub mod add_block;
pub mod add_complaint;
pub mod add_like;
pub mod add_profile;
pub mod delete_image;
pub mod delete_profile;
pub mod freeze_profile;
pub mod get_profile;
pub mod get_profile_detail;
pub mod get_profile_list;
pub mod get_profile_short_info;
pub mod restore_profile;
pub mod update_coordinates;
pub mod update_filter;
pub mod update_like;
pub mod update_profile;
