use leptos::ev::MouseEvent;

use super::*;

/// Multi-click selects the label text unless the default is cancelled.
fn suppresses_selection(click_count: i32) -> bool {
    click_count > 1
}

#[component]
/// Form label. Double-clicking it does not select its text.
pub fn Label(
    /// Id of the labelled control.
    #[prop(optional, into)]
    html_for: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            for=html_for
            class=merge_class(styles::LABEL, class.as_deref())
            data-slot="label"
            on:mousedown=move |ev: MouseEvent| {
                if !ev.default_prevented() && suppresses_selection(ev.detail()) {
                    ev.prevent_default();
                }
            }
            {..attrs}
        >
            {children()}
        </label>
    }
}
