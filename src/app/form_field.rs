use leptos::{either::*, prelude::*};

use crate::{catalog::ChoiceOption, contact::FieldKey};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-dark-700 border border-gray-600 focus:outline-none focus:border-primary-500 focus:ring-2 focus:ring-primary-500/20 transition-all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Tel,
    TextArea,
    Select,
}

/// Labelled input for one form key. Holds no state of its own: the value
/// and focus emphasis come in as signals, every event goes straight back out.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    name: FieldKey,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] is_active: Signal<bool>,
    on_change: Callback<String>,
    on_focus: Callback<()>,
    on_blur: Callback<()>,
    #[prop(optional)] field_type: FieldType,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] options: &'static [ChoiceOption],
    /// Label of the leading empty option of a select.
    #[prop(optional, into)]
    empty_label: Option<String>,
    /// Entrance animation delay in seconds.
    #[prop(optional)]
    delay: f64,
) -> impl IntoView {
    let id = format!("field-{}", name.as_str());

    let control = match field_type {
        FieldType::TextArea => EitherOf3::A(view! {
            <textarea
                id=id.clone()
                name=name.as_str()
                rows=rows.to_string()
                class=format!("{INPUT_CLASS} resize-none")
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:focus=move |_| on_focus.run(())
                on:blur=move |_| on_blur.run(())
            ></textarea>
        }),
        FieldType::Select => EitherOf3::B(view! {
            <select
                id=id.clone()
                name=name.as_str()
                class=INPUT_CLASS
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                on:focus=move |_| on_focus.run(())
                on:blur=move |_| on_blur.run(())
            >
                <option value="">{empty_label.unwrap_or_default()}</option>
                {options
                    .iter()
                    .map(|o| {
                        view! {
                            <option value=o.value selected=move || value.get() == o.value>
                                {o.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }),
        FieldType::Text | FieldType::Tel => EitherOf3::C(view! {
            <input
                id=id.clone()
                type=if field_type == FieldType::Tel { "tel" } else { "text" }
                name=name.as_str()
                class=INPUT_CLASS
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:focus=move |_| on_focus.run(())
                on:blur=move |_| on_blur.run(())
            />
        }),
    };

    view! {
        <div class="animate-slide-in" style=format!("animation-delay: {delay}s")>
            <label for=id class="text-sm font-medium mb-2 flex items-center">
                {icon.map(|i| view! { <span class="mr-2 text-primary-500">{i}</span> })}
                {label}
                {required.then_some(view! { <span class="ml-1 text-accent-500">"*"</span> })}
            </label>
            <div class=move || {
                if is_active.get() {
                    "relative transition-all duration-300 scale-[1.01]"
                } else {
                    "relative transition-all duration-300"
                }
            }>
                {control}
                <Show when=move || is_active.get()>
                    <span class="absolute inset-0 -z-10 rounded-lg bg-primary-500/5 blur-sm"></span>
                </Show>
            </div>
        </div>
    }
}
