use yew::prelude::*;
use yew::virtual_dom::VNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// How a [`Button`] produces its activation element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonMode {
    /// Render a native `<button>` around the children.
    #[default]
    Control,
    /// Render the child element itself, carrying the button's classes and label.
    AsChild,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub mode: ButtonMode,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!("btn", props.variant.class(), props.class.clone());

    match props.mode {
        ButtonMode::Control => html! {
            <button
                type="button"
                class={classes}
                aria-label={props.aria_label.clone()}
                onclick={props.onclick.clone()}
            >
                { for props.children.iter() }
            </button>
        },
        ButtonMode::AsChild => {
            let class = classes.to_string();
            html! {
                <>
                    { for props.children.iter().map(|child| {
                        delegate(child, &class, props.aria_label.as_ref())
                    }) }
                </>
            }
        }
    }
}

/// Moves the button's presentation onto `child`. Non-element children pass through.
fn delegate(child: Html, class: &str, aria_label: Option<&AttrValue>) -> Html {
    match child {
        VNode::VTag(mut tag) => {
            let merged = match tag.attributes.iter().find(|(key, _)| *key == "class") {
                Some((_, existing)) if !existing.is_empty() => format!("{existing} {class}"),
                _ => class.to_string(),
            };
            tag.add_attribute("class", merged);
            if let Some(label) = aria_label {
                tag.add_attribute("aria-label", label.clone());
            }
            VNode::VTag(tag)
        }
        other => other,
    }
}
