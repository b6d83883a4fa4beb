use crate::{dto::HandlerConfig, platform::NotificationCenter};

/// Installs the foreground presentation behaviour.
///
/// Call once at application startup, before any notification arrives.
pub fn init_notification_handler(
    notification_center: &dyn NotificationCenter,
    config: HandlerConfig,
) {
    notification_center.set_handler(config);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::platform::MockNotificationCenter;

    #[test]
    fn handler_configured_with_defaults() {
        let mut notification_center = MockNotificationCenter::new();
        notification_center
            .expect_set_handler()
            .once()
            .returning(|config| {
                assert!(config.show_alert);
                assert!(config.play_sound);
                assert!(!config.set_badge);
                assert!(config.show_banner);
                assert!(config.show_list);
            });

        init_notification_handler(&notification_center, HandlerConfig::default());

        // assertions happen in mock
    }
}
