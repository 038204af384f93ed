//! Form inputs bound to a field of a form signal.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

/// Read/write pair for one text field.
pub type TextBinding = (Signal<String>, Callback<String>);

/// Read/write pair for one checkbox.
pub type FlagBinding = (Signal<bool>, Callback<bool>);

/// Bind a `String` field of the form held in `form`.
pub fn bind_text<T: 'static>(
    form: RwSignal<T>,
    get: fn(&T) -> &String,
    set: fn(&mut T) -> &mut String,
) -> TextBinding {
    (
        Signal::derive(move || form.with(|f| get(f).clone())),
        Callback::new(move |value: String| form.update(|f| *set(f) = value)),
    )
}

pub fn bind_flag<T: 'static>(
    form: RwSignal<T>,
    get: fn(&T) -> bool,
    set: fn(&mut T) -> &mut bool,
) -> FlagBinding {
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |value: bool| form.update(|f| *set(f) = value)),
    )
}

#[component]
pub fn TextField(
    label: &'static str,
    bind: TextBinding,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let (value, on_input) = bind;
    let marker = if required { " *" } else { "" };

    let input = if multiline {
        view! {
            <textarea
                rows="3"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                type=input_type
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        }
        .into_view()
    };

    view! {
        <label class="field">
            <span class="field-label">{label}{marker}</span>
            {input}
        </label>
    }
}

#[component]
pub fn CheckboxField(label: &'static str, bind: FlagBinding) -> impl IntoView {
    let (checked, on_change) = bind;
    view! {
        <label class="checkbox-field">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.call(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

/// First file picked in a file input, if any.
pub fn picked_file(ev: &Event) -> Option<web_sys::File> {
    let input: HtmlInputElement = event_target(ev);
    input.files().and_then(|files| files.get(0))
}
