/// Controls how a notification received in the foreground is presented.
#[derive(Debug, Clone, Copy)]
pub struct HandlerConfig {
    pub show_alert: bool,
    pub play_sound: bool,
    pub set_badge: bool,
    pub show_banner: bool,
    pub show_list: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            show_alert: true,
            play_sound: true,
            set_badge: false,
            show_banner: true,
            show_list: true,
        }
    }
}
