use event_types::EventStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub image_url: String,
    pub status: EventStatus,
    pub capacity: u32,
    pub attendees: u32,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let badge = classes!(
        "event-status",
        format!("event-status-{}", props.status.as_str())
    );

    html! {
        <article
            class="event-card flex flex-col h-full rounded-lg overflow-hidden border bg-card"
            data-event-id={props.id.clone()}
        >
            <div class="relative h-48 overflow-hidden">
                <img
                    class="h-full w-full object-cover"
                    src={props.image_url.clone()}
                    alt={props.title.clone()}
                    loading="lazy"
                />
                <span class={badge}>{ props.status.label() }</span>
            </div>
            <div class="flex-1 p-6 space-y-4">
                <h3 class="text-xl font-semibold">{ &props.title }</h3>
                <div class="space-y-2 text-sm text-muted-foreground">
                    <p class="event-date">{ &props.date }</p>
                    <p class="event-location">{ &props.location }</p>
                </div>
                <p class="event-description">{ &props.description }</p>
                <p class="event-attendance text-sm">
                    { format!("{} / {} attending", props.attendees, props.capacity) }
                </p>
            </div>
        </article>
    }
}
