pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod dialogs;
pub mod file_input;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod map_ffi;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
