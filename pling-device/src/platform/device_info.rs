use crate::dto::DeviceType;

#[cfg_attr(test, mockall::automock)]
pub trait DeviceInfo: Send + Sync {
    fn is_physical_device(&self) -> bool;

    fn device_type(&self) -> DeviceType;
}
