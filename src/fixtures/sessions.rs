//! Session and notification-preference fixtures for the settings stories

/// An active sign-in session row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: &'static str,
    pub device: &'static str,
    pub location: &'static str,
    pub last_active: &'static str,
    pub current: bool,
}

static SESSIONS: &[SessionRecord] = &[
    SessionRecord {
        id: "session-1",
        device: "Chrome on macOS",
        location: "New York, US",
        last_active: "Now",
        current: true,
    },
    SessionRecord {
        id: "session-2",
        device: "Safari on iPhone",
        location: "New York, US",
        last_active: "2 hours ago",
        current: false,
    },
    SessionRecord {
        id: "session-3",
        device: "Firefox on Windows",
        location: "London, UK",
        last_active: "3 days ago",
        current: false,
    },
];

/// Active sessions shown by the security settings block
pub fn active_sessions() -> &'static [SessionRecord] {
    SESSIONS
}

/// A notification preference row (label, description, default state)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPref {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

static NOTIFICATION_PREFS: &[NotificationPref] = &[
    NotificationPref {
        id: "notif-security",
        title: "Security alerts",
        description: "Get notified about sign-ins from new devices and password changes.",
        enabled: true,
    },
    NotificationPref {
        id: "notif-product",
        title: "Product updates",
        description: "News about new features, improvements, and releases.",
        enabled: true,
    },
    NotificationPref {
        id: "notif-marketing",
        title: "Marketing emails",
        description: "Tips, offers, and promotional content.",
        enabled: false,
    },
    NotificationPref {
        id: "notif-newsletter",
        title: "Weekly newsletter",
        description: "A digest of activity, analytics, and insights.",
        enabled: true,
    },
];

/// Notification preference rows shown by the notifications settings block
pub fn notification_prefs() -> &'static [NotificationPref] {
    NOTIFICATION_PREFS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_current_session() {
        let current = active_sessions().iter().filter(|s| s.current).count();
        assert_eq!(current, 1);
    }

    #[test]
    fn notification_ids_are_distinct() {
        let mut ids: Vec<_> = notification_prefs().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), notification_prefs().len());
    }
}
