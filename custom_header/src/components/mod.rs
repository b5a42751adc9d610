mod custom_header;

pub use custom_header::{CustomHeader, HeaderProps, HEADER_ICON, HEADER_ICON_ALT};
