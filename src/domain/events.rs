//! Domain events recorded by the ad aggregate.
//!
//! Events live in an in-memory queue on the aggregate instance. The use case
//! that persisted the aggregate drains them afterwards; delivery is in-process
//! and non-durable, so a crash between save and drain loses them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum AdEvent {
    #[serde(rename = "AdPublished")]
    Published {
        ad_id: Uuid,
        seller_id: Uuid,
        title: String,
        occurred_at: DateTime<Utc>,
    },
    #[serde(rename = "AdSold")]
    Sold {
        ad_id: Uuid,
        seller_id: Uuid,
        title: String,
        occurred_at: DateTime<Utc>,
    },
}

impl AdEvent {
    /// Stable event name, used as a log field and metric label.
    pub fn name(&self) -> &'static str {
        match self {
            AdEvent::Published { .. } => "AdPublished",
            AdEvent::Sold { .. } => "AdSold",
        }
    }

    pub fn ad_id(&self) -> Uuid {
        match self {
            AdEvent::Published { ad_id, .. } | AdEvent::Sold { ad_id, .. } => *ad_id,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            AdEvent::Published { occurred_at, .. } | AdEvent::Sold { occurred_at, .. } => {
                *occurred_at
            }
        }
    }
}

/// Logs and counts drained events.
///
/// This is the only subscriber; there is no durable bus behind it.
pub fn dispatch(events: &[AdEvent]) {
    for event in events {
        tracing::info!(
            event = event.name(),
            ad_id = %event.ad_id(),
            occurred_at = %event.occurred_at(),
            "Domain event"
        );
        metrics::counter!("domain_events_total", "event" => event.name()).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let id = Uuid::new_v4();
        let published = AdEvent::Published {
            ad_id: id,
            seller_id: Uuid::new_v4(),
            title: "Road bike".to_string(),
            occurred_at: Utc::now(),
        };
        assert_eq!(published.name(), "AdPublished");
        assert_eq!(published.ad_id(), id);
    }

    #[test]
    fn test_serialized_shape() {
        let event = AdEvent::Sold {
            ad_id: Uuid::nil(),
            seller_id: Uuid::nil(),
            title: "Road bike".to_string(),
            occurred_at: Utc::now(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "AdSold");
        assert!(value.get("adId").is_some());
    }
}
