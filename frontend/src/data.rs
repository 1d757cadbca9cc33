//! Built-in event listing rendered when no remote source is configured.

use event_types::{EventRecord, EventStatus};

/// The featured events, in display order.
pub fn featured_events() -> Vec<EventRecord> {
    vec![
        EventRecord {
            id: "1".to_string(),
            title: "AI Ethics Workshop".to_string(),
            description: "Join us for a comprehensive workshop on ethical considerations in AI development and deployment. Learn about bias, fairness, and transparency.".to_string(),
            date: "March 15, 2025".to_string(),
            location: "Tech Hub Medellín".to_string(),
            image_url: "https://images.unsplash.com/photo-1581092921461-7031e4f48eda?q=80&w=2070&auto=format&fit=crop".to_string(),
            status: EventStatus::Upcoming,
            capacity: 50,
            attendees: 32,
        },
        EventRecord {
            id: "2".to_string(),
            title: "Machine Learning Fundamentals".to_string(),
            description: "A beginner-friendly introduction to machine learning concepts, algorithms, and practical applications in today's world.".to_string(),
            date: "March 10, 2025".to_string(),
            location: "Universidad de Antioquia".to_string(),
            image_url: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=2065&auto=format&fit=crop".to_string(),
            status: EventStatus::Today,
            capacity: 100,
            attendees: 78,
        },
        EventRecord {
            id: "3".to_string(),
            title: "AI in Healthcare Symposium".to_string(),
            description: "Explore how artificial intelligence is transforming healthcare with leading experts from around the world.".to_string(),
            date: "April 5, 2025".to_string(),
            location: "Hospital Universitario San Vicente Fundación".to_string(),
            image_url: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?q=80&w=2070&auto=format&fit=crop".to_string(),
            status: EventStatus::Upcoming,
            capacity: 75,
            attendees: 45,
        },
    ]
}
