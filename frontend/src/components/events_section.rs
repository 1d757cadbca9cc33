use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::components::button::{Button, ButtonMode, ButtonVariant};
use crate::components::events_grid::EventsGrid;
use crate::services::api::ApiService;
use crate::state::{run_load, EventSource, LoadState};

pub const HEADING_ID: &str = "events-heading";
pub const EVENTS_PATH: &str = "/events";

#[derive(Properties, PartialEq)]
pub struct EventsSectionProps {
    /// Extra classes appended to the section's own.
    #[prop_or_default]
    pub class: Classes,
    /// Forces the skeleton regardless of the load state.
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub source: EventSource,
}

#[function_component(EventsSection)]
pub fn events_section(props: &EventsSectionProps) -> Html {
    let state = use_state(|| LoadState::initial(&props.source));

    {
        let state = state.clone();

        use_effect_with(props.source.clone(), move |source| {
            let cancelled = Rc::new(Cell::new(false));
            match source.clone() {
                EventSource::Static => state.set(LoadState::initial(source)),
                EventSource::Remote(url) => {
                    tracing::debug!("Loading events from {}", url);
                    let cancelled = cancelled.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let fetch = async move { ApiService::list_events(&url).await };
                        run_load(fetch, cancelled, move |next| state.set(next)).await;
                    });
                }
            }
            move || cancelled.set(true)
        });
    }

    let view_state = if props.loading {
        LoadState::Loading
    } else {
        (*state).clone()
    };
    tracing::debug!(state = view_state.kind(), "Rendering events section");

    html! {
        <section
            class={classes!("min-h-screen", "py-20", "px-4", "bg-background", props.class.clone())}
            aria-labelledby={HEADING_ID}
        >
            <div class="container mx-auto">
                <div class="flex flex-col items-center justify-center mb-12 text-center">
                    <h2 id={HEADING_ID} class="text-3xl font-bold tracking-tight sm:text-4xl mb-4">
                        { "Featured Events" }
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl">
                        { "Discover the latest AI events happening in Medellín. Connect with experts, learn new skills, and be part of the growing AI community." }
                    </p>
                </div>

                <EventsGrid state={view_state} />

                <div class="flex justify-center mt-12">
                    <Button
                        variant={ButtonVariant::Primary}
                        mode={ButtonMode::AsChild}
                        aria_label="View all events"
                    >
                        <a href={EVENTS_PATH}>{ "View All Events" }</a>
                    </Button>
                </div>
            </div>
        </section>
    }
}
