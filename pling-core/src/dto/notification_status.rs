use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn notification_status_json_roundtrip() {
        let json = serde_json::to_string(&NotificationStatus::Pending).unwrap();
        assert_eq!(json, r#""pending""#);

        let status = serde_json::from_str::<NotificationStatus>(r#""failed""#).unwrap();
        assert_eq!(status, NotificationStatus::Failed);
    }
}
