mod grant_form;
mod point_configs_table;
mod points_config_form;
mod points_log;
mod table;
mod toasts;
mod users_table;

pub use grant_form::grant_points_form;
pub use point_configs_table::point_configs_table;
pub use points_config_form::points_config_form;
pub use points_log::points_log;
pub use toasts::toasts;
pub use users_table::users_table;
