//! Authorization policy: pure decision functions over an actor and a resource.
//!
//! No side effects and no I/O. Callers check the result before invoking the
//! corresponding service operation; a denial surfaces as
//! [`crate::CourierError::Unauthorized`] at the call site.

use crate::types::Correspondents;

/// True iff the actor is the sender or the recipient of the message.
pub fn can_view_message<M: Correspondents>(actor: &str, message: &M) -> bool {
    actor == message.sender() || actor == message.recipient()
}

/// True iff the actor is the recipient. Senders may not mark their own
/// messages read.
pub fn can_mark_read<M: Correspondents>(actor: &str, message: &M) -> bool {
    actor == message.recipient()
}

/// True iff the actor is the profile owner. There is no administrative
/// override.
pub fn can_view_profile(actor: &str, target_username: &str) -> bool {
    actor == target_username
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestMessage {
        from: &'static str,
        to: &'static str,
    }

    impl Correspondents for TestMessage {
        fn sender(&self) -> &str {
            self.from
        }
        fn recipient(&self) -> &str {
            self.to
        }
    }

    const MESSAGE: TestMessage = TestMessage {
        from: "alice",
        to: "bob",
    };

    #[test]
    fn sender_and_recipient_can_view() {
        assert!(can_view_message("alice", &MESSAGE));
        assert!(can_view_message("bob", &MESSAGE));
    }

    #[test]
    fn third_party_cannot_view() {
        assert!(!can_view_message("mallory", &MESSAGE));
        assert!(!can_view_message("", &MESSAGE));
    }

    #[test]
    fn only_recipient_can_mark_read() {
        assert!(can_mark_read("bob", &MESSAGE));
        assert!(!can_mark_read("alice", &MESSAGE));
        assert!(!can_mark_read("mallory", &MESSAGE));
    }

    #[test]
    fn self_message_keeps_policy_consistent() {
        let note = TestMessage {
            from: "alice",
            to: "alice",
        };
        assert!(can_view_message("alice", &note));
        assert!(can_mark_read("alice", &note));
        assert!(!can_view_message("bob", &note));
    }

    #[test]
    fn only_owner_can_view_profile() {
        assert!(can_view_profile("alice", "alice"));
        assert!(!can_view_profile("alice", "bob"));
        assert!(!can_view_profile("alice", "missing"));
    }
}
