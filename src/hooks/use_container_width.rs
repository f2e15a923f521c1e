use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::debounced_resize_listener;

/// Tracks the client width of the element behind `node`.
///
/// Measures on mount and again after each debounced window resize. Stays
/// `None` until a non-zero width has been observed.
#[hook]
pub fn use_container_width(node: NodeRef) -> Option<f64> {
    let width = use_state(|| None::<f64>);

    {
        let width = width.clone();

        use_effect_with(node, move |node| {
            let measure = {
                let node = node.clone();
                move || {
                    if let Some(element) = node.cast::<HtmlElement>() {
                        let measured = f64::from(element.client_width());
                        if measured > 0.0 {
                            width.set(Some(measured));
                        }
                    }
                }
            };

            measure();
            let listener = debounced_resize_listener(measure, Config::RESIZE_DEBOUNCE_MS);

            move || drop(listener)
        });
    }

    *width
}
