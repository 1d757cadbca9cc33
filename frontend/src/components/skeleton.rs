use yew::prelude::*;

/// Placeholder with the same footprint as an event card.
#[function_component(EventCardSkeleton)]
pub fn event_card_skeleton() -> Html {
    html! {
        <div
            class="event-skeleton flex flex-col h-full rounded-lg overflow-hidden animate-pulse"
            aria-hidden="true"
        >
            <div class="h-48 bg-muted" />
            <div class="flex-1 p-6 space-y-4">
                <div class="skeleton-bar h-6 bg-muted rounded w-3/4" />
                <div class="space-y-2">
                    <div class="skeleton-bar h-4 bg-muted rounded w-1/2" />
                    <div class="skeleton-bar h-4 bg-muted rounded w-1/3" />
                </div>
                <div class="skeleton-bar h-4 bg-muted rounded w-full" />
                <div class="skeleton-bar h-4 bg-muted rounded w-full" />
                <div class="skeleton-bar h-4 bg-muted rounded w-2/3" />
            </div>
        </div>
    }
}
