use crate::domain::notification::Notification;

/// Single-slot toast state. Showing a new message supersedes the pending one.
#[derive(Debug, Clone, Default)]
pub struct FeedbackChannel {
    current: Option<Notification>,
    generation: u64,
}

impl FeedbackChannel {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the ticket that expires this notification.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.generation += 1;
        self.current = Some(notification);
        self.generation
    }

    /// Clears the slot only if nothing newer was shown since `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut channel = FeedbackChannel::default();
        assert!(channel.is_idle());

        let ticket = channel.show(Notification::success("Copied!"));
        assert_eq!(channel.current().unwrap().message, "Copied!");

        assert!(channel.expire(ticket));
        assert!(channel.is_idle());
        assert!(!channel.expire(ticket));
    }

    #[test]
    fn test_newer_notification_preempts() {
        let mut channel = FeedbackChannel::default();
        let first = channel.show(Notification::success("Jane added!"));
        let second = channel.show(Notification::error("Failed to delete"));

        // The first timer firing late must not clear the second message
        assert!(!channel.expire(first));
        let current = channel.current().unwrap();
        assert_eq!(current.message, "Failed to delete");
        assert!(current.is_error());

        assert!(channel.expire(second));
    }
}
