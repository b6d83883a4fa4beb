use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Records a notification in the backend for the current user.
    ///
    /// ### Returns
    /// Whether the notification was recorded.
    ///
    async fn create_notification(&self, title: &str, message: &str) -> bool;

    /// Presents a notification on the device immediately.
    async fn show_local_notification(&self, title: &str, body: &str);
}
