use yew::{BaseComponent, ServerRenderer};

/// Renders a component to an HTML string without hydration markers.
pub(crate) async fn render<C, F>(props: F) -> String
where
    C: BaseComponent,
    F: FnOnce() -> C::Properties + Send + 'static,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

/// Returns the opening tag of the first element that contains `needle`.
pub(crate) fn opening_tag<'a>(html: &'a str, needle: &str) -> Option<&'a str> {
    let at = html.find(needle)?;
    let start = html[..=at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(&html[start..=end])
}

/// Number of rendered event cards.
pub(crate) fn card_count(html: &str) -> usize {
    html.matches("data-event-id=").count()
}

/// Number of rendered skeleton placeholders.
pub(crate) fn skeleton_count(html: &str) -> usize {
    html.matches(r#"class="event-skeleton "#).count()
}
