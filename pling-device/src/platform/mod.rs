mod device_info;
mod notification_center;

pub use device_info::*;
pub use notification_center::*;
