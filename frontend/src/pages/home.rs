use yew::prelude::*;

use crate::components::events_section::EventsSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main>
            <div class="container hero">
                <p class="hero-tagline">{ "The community for artificial intelligence in Medellín." }</p>
            </div>
            <EventsSection />
        </main>
    }
}
