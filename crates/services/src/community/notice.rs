/// How user-facing messages are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeStyle {
    /// Non-blocking toast notifications.
    #[default]
    Toast,
    /// Blocking alert dialog, used when no toast surface exists.
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message for the user after an action completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Toast {
        kind: NoticeKind,
        message: String,
        title: String,
        duration_ms: u64,
    },
    Alert {
        kind: NoticeKind,
        message: String,
    },
}

impl Notice {
    #[must_use]
    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::Toast { kind, .. } | Notice::Alert { kind, .. } => *kind,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Notice::Toast { message, .. } | Notice::Alert { message, .. } => message,
        }
    }
}

impl NoticeStyle {
    #[must_use]
    pub fn lesson_deleted(self) -> Notice {
        match self {
            NoticeStyle::Toast => Notice::Toast {
                kind: NoticeKind::Success,
                message: "Lección eliminada correctamente".into(),
                title: "Éxito".into(),
                duration_ms: 3000,
            },
            NoticeStyle::Alert => Notice::Alert {
                kind: NoticeKind::Success,
                message: "Lección eliminada".into(),
            },
        }
    }

    #[must_use]
    pub fn delete_failed(self, reason: &str) -> Notice {
        let message = format!("Error al eliminar: {reason}");
        match self {
            NoticeStyle::Toast => Notice::Toast {
                kind: NoticeKind::Error,
                message,
                title: "Error".into(),
                duration_ms: 4000,
            },
            NoticeStyle::Alert => Notice::Alert {
                kind: NoticeKind::Error,
                message,
            },
        }
    }
}
