use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::prefers_reduced_motion;

const REVEAL_THRESHOLD: f64 = 0.15;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub children: Children,
}

/// Adds `in-view` the first time the wrapped block scrolls into the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_state(|| false);

    {
        let node = node.clone();
        let in_view = in_view.setter();
        use_effect_with_deps(
            move |_| {
                let observer = observe_once(&node, in_view);
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), in_view.then_some("in-view"))}
        >
            { for props.children.iter() }
        </section>
    }
}

fn observe_once(
    node: &NodeRef,
    in_view: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let element = node.cast::<Element>()?;

    if prefers_reduced_motion() {
        in_view.set(true);
        return None;
    }

    let setter = in_view.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    setter.set(true);
                    observer.unobserve(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(_) => {
            debug!("IntersectionObserver unavailable, revealing immediately");
            in_view.set(true);
            None
        }
    }
}
