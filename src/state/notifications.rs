use crate::models::notification::{Notification, NotificationKind};
use crate::models::user::UserId;
use crate::store::Catalog;
use chrono::{DateTime, Utc};
use leptos::logging::log;
use std::collections::HashMap;
use uuid::Uuid;

/// Per-recipient mailboxes, newest notification first.
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    mailboxes: HashMap<UserId, Vec<Notification>>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliver(&mut self, notification: Notification) {
        self.mailboxes
            .entry(notification.recipient_id.clone())
            .or_default()
            .insert(0, notification);
    }

    pub fn for_recipient(&self, recipient: &str) -> &[Notification] {
        self.mailboxes.get(recipient).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn unread_count(&self, recipient: &str) -> usize {
        self.for_recipient(recipient).iter().filter(|n| !n.read).count()
    }

    /// Returns false when the recipient has no notification with that id.
    pub fn mark_read(&mut self, recipient: &str, notification_id: &str) -> bool {
        let Some(mailbox) = self.mailboxes.get_mut(recipient) else {
            return false;
        };
        match mailbox.iter_mut().find(|n| n.id == notification_id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }
}

/// Delivers a "new review" notification to every follower of `actor_id`.
/// Returns the recipients in catalog order.
pub fn fan_out_new_review(
    catalog: &Catalog,
    inbox: &mut Inbox,
    actor_id: &str,
    item_id: &str,
    now: DateTime<Utc>,
) -> Vec<UserId> {
    let recipients: Vec<UserId> = catalog
        .followers_of(actor_id)
        .into_iter()
        .filter(|u| u.id != actor_id)
        .map(|u| u.id.clone())
        .collect();

    for recipient in &recipients {
        inbox.deliver(Notification {
            id: format!("notif-{}", Uuid::new_v4()),
            kind: NotificationKind::NewReview,
            actor_id: actor_id.to_string(),
            item_id: item_id.to_string(),
            recipient_id: recipient.clone(),
            read: false,
            timestamp: now,
        });
    }
    log!(
        "[NOTIFY] Review by {} on {} delivered to {} follower(s)",
        actor_id,
        item_id,
        recipients.len()
    );
    recipients
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_follower_gets_one_unread_notification() {
        let catalog = Catalog::seeded(10);
        let mut inbox = Inbox::new();
        let recipients = fan_out_new_review(&catalog, &mut inbox, "u1", "b2", Utc::now());

        assert_eq!(recipients, vec!["u3".to_string(), "u4".to_string()]);
        for recipient in &recipients {
            let mailbox = inbox.for_recipient(recipient);
            assert_eq!(mailbox.len(), 1);
            assert!(!mailbox[0].read);
            assert_eq!(mailbox[0].actor_id, "u1");
            assert_eq!(mailbox[0].item_id, "b2");
        }
        assert!(inbox.for_recipient("u1").is_empty());
        assert!(inbox.for_recipient("u2").is_empty());
    }

    #[test]
    fn nobody_following_means_no_delivery() {
        let catalog = Catalog::seeded(10);
        let mut inbox = Inbox::new();
        // nobody follows u4
        assert!(fan_out_new_review(&catalog, &mut inbox, "u4", "b1", Utc::now()).is_empty());
        assert!(catalog.users().iter().all(|u| inbox.for_recipient(&u.id).is_empty()));
    }

    #[test]
    fn mark_read_updates_unread_count() {
        let catalog = Catalog::seeded(10);
        let mut inbox = Inbox::new();
        fan_out_new_review(&catalog, &mut inbox, "u1", "b2", Utc::now());
        fan_out_new_review(&catalog, &mut inbox, "u1", "b3", Utc::now());
        assert_eq!(inbox.unread_count("u3"), 2);

        let newest = inbox.for_recipient("u3")[0].clone();
        assert_eq!(newest.item_id, "b3");
        assert!(inbox.mark_read("u3", &newest.id));
        assert_eq!(inbox.unread_count("u3"), 1);
        assert!(!inbox.mark_read("u4", &newest.id));
        assert!(!inbox.mark_read("nobody", &newest.id));
    }
}
