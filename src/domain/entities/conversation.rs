//! Conversation entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A messaging thread about one ad between a buyer and the seller.
///
/// Identity is the `(ad_id, buyer_id, seller_id)` triple; storage enforces
/// it with a unique index.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    id: Uuid,
    ad_id: Uuid,
    buyer_id: Uuid,
    seller_id: Uuid,
    last_message_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl Conversation {
    pub fn create(ad_id: Uuid, buyer_id: Uuid, seller_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            ad_id,
            buyer_id,
            seller_id,
            last_message_at: now,
            created_at: now,
        }
    }

    pub fn restore(
        id: Uuid,
        ad_id: Uuid,
        buyer_id: Uuid,
        seller_id: Uuid,
        last_message_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            ad_id,
            buyer_id,
            seller_id,
            last_message_at,
            created_at,
        }
    }

    /// Records that a message was just appended.
    pub fn touch(&mut self) {
        self.last_message_at = Utc::now();
    }

    /// True if `user_id` is the buyer or the seller.
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.buyer_id == user_id || self.seller_id == user_id
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ad_id(&self) -> Uuid {
        self.ad_id
    }

    pub fn buyer_id(&self) -> Uuid {
        self.buyer_id
    }

    pub fn seller_id(&self) -> Uuid {
        self.seller_id
    }

    pub fn last_message_at(&self) -> DateTime<Utc> {
        self.last_message_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_involves_only_participants() {
        let buyer = Uuid::new_v4();
        let seller = Uuid::new_v4();
        let conversation = Conversation::create(Uuid::new_v4(), buyer, seller);

        assert!(conversation.involves(buyer));
        assert!(conversation.involves(seller));
        assert!(!conversation.involves(Uuid::new_v4()));
    }

    #[test]
    fn test_touch_moves_last_message_at_forward() {
        let mut conversation = Conversation::create(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let before = conversation.last_message_at();

        conversation.touch();

        assert!(conversation.last_message_at() >= before);
        assert_eq!(conversation.created_at(), before);
    }
}
