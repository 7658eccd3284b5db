pub mod add_param;
pub mod input_field;
pub mod params_list;
