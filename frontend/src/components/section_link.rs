use yew::prelude::*;

use crate::motion::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    /// Element id without the leading `#`.
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    pub children: Children,
}

/// In-page anchor that scrolls instead of jumping, when the target exists.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if !target.is_empty() && scroll_to_section(&target) {
                e.prevent_default();
            }
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
