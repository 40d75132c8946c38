pub mod tab_strip;

pub use tab_strip::TabStrip;
