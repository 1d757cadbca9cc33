use yew::prelude::*;

use crate::components::button::{Button, ButtonMode, ButtonVariant};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <div class="empty-state">
                <h2>{ "404 - Page Not Found" }</h2>
                <p>{ "The page you're looking for doesn't exist." }</p>
                <Button variant={ButtonVariant::Secondary} mode={ButtonMode::AsChild}>
                    <a href="/">{ "Go Home" }</a>
                </Button>
            </div>
        </div>
    }
}
