use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::{
    form_field::{FieldType, FormField},
    success::SuccessState,
    use_form,
};
use crate::{
    catalog::{BUDGET_OPTIONS, SERVICE_TYPES, TIMELINE_OPTIONS},
    contact::{FieldKey, FormKind},
};

#[component]
pub fn ServiceRequestModal(open: RwSignal<bool>) -> impl IntoView {
    let close = Callback::new(move |_: ()| open.set(false));

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            close.run(());
        }
    });

    view! {
        <Show when=move || open.get()>
            // backdrop
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-50 flex items-center justify-center p-4 animate-fade-in"
                on:click=move |_| close.run(())
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    class="relative bg-dark-800 rounded-2xl shadow-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto animate-pop-in"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="absolute inset-0 bg-gradient-to-r from-primary-400/10 to-accent-400/10 rounded-2xl"></div>
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute top-4 right-4 z-10 w-10 h-10 rounded-full bg-dark-700 flex items-center justify-center text-gray-300 hover:bg-red-500 hover:text-white hover:rotate-90 transition-all"
                        on:click=move |_| close.run(())
                    >
                        "✕"
                    </button>
                    <div class="relative p-8 md:p-10">
                        <ModalHeader />
                        <ServiceRequestForm on_close=close />
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ModalHeader() -> impl IntoView {
    view! {
        <div class="text-center mb-8 animate-slide-up">
            <div class="inline-flex items-center justify-center w-16 h-16 rounded-full bg-gradient-to-br from-primary-400/20 to-accent-400/20 mb-4 text-3xl">
                "✨"
            </div>
            <h2 class="text-3xl md:text-4xl font-bold mb-2 bg-gradient-to-r from-primary-500 via-accent-500 to-primary-400 text-transparent bg-clip-text">
                "Request Custom Service"
            </h2>
            <p class="text-gray-300">"Tell us about your project and we'll get back to you"</p>
        </div>
    }
}

#[component]
fn ServiceRequestForm(on_close: Callback<()>) -> impl IntoView {
    let form = use_form(FormKind::ServiceRequest, Some(on_close));

    view! {
        <Show
            when=move || !form.is_submitted().get()
            fallback=|| {
                view! {
                    <SuccessState
                        title="Request Submitted!"
                        body="Your request has been sent to WhatsApp. We'll get back to you as soon as possible!"
                    />
                }
            }
        >
            <form
                class="space-y-6"
                on:submit=move |ev| {
                    ev.prevent_default();
                    form.submit();
                }
            >
                <FormField
                    label="Name"
                    icon="👤"
                    name=FieldKey::Name
                    value=form.value(FieldKey::Name)
                    is_active=form.is_active(FieldKey::Name)
                    on_change=form.on_change(FieldKey::Name)
                    on_focus=form.on_focus(FieldKey::Name)
                    on_blur=form.on_blur()
                    placeholder="Your name"
                    required=true
                    delay=0.2
                />
                <FormField
                    label="Phone Number"
                    icon="📞"
                    name=FieldKey::Phone
                    field_type=FieldType::Tel
                    value=form.value(FieldKey::Phone)
                    is_active=form.is_active(FieldKey::Phone)
                    on_change=form.on_change(FieldKey::Phone)
                    on_focus=form.on_focus(FieldKey::Phone)
                    on_blur=form.on_blur()
                    placeholder="+233XXXXXXXXX"
                    required=true
                    delay=0.25
                />
                <FormField
                    label="Service Type"
                    icon="✨"
                    name=FieldKey::ServiceType
                    field_type=FieldType::Select
                    options=SERVICE_TYPES
                    empty_label="Select a service type"
                    value=form.value(FieldKey::ServiceType)
                    is_active=form.is_active(FieldKey::ServiceType)
                    on_change=form.on_change(FieldKey::ServiceType)
                    on_focus=form.on_focus(FieldKey::ServiceType)
                    on_blur=form.on_blur()
                    required=true
                    delay=0.3
                />
                <FormField
                    label="Project Description"
                    icon="💬"
                    name=FieldKey::Description
                    field_type=FieldType::TextArea
                    value=form.value(FieldKey::Description)
                    is_active=form.is_active(FieldKey::Description)
                    on_change=form.on_change(FieldKey::Description)
                    on_focus=form.on_focus(FieldKey::Description)
                    on_blur=form.on_blur()
                    placeholder="Describe your project requirements..."
                    required=true
                    delay=0.35
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <FormField
                        label="Budget Range"
                        name=FieldKey::Budget
                        field_type=FieldType::Select
                        options=BUDGET_OPTIONS
                        empty_label="Select budget"
                        value=form.value(FieldKey::Budget)
                        is_active=form.is_active(FieldKey::Budget)
                        on_change=form.on_change(FieldKey::Budget)
                        on_focus=form.on_focus(FieldKey::Budget)
                        on_blur=form.on_blur()
                        delay=0.4
                    />
                    <FormField
                        label="Timeline"
                        name=FieldKey::Timeline
                        field_type=FieldType::Select
                        options=TIMELINE_OPTIONS
                        empty_label="Select timeline"
                        value=form.value(FieldKey::Timeline)
                        is_active=form.is_active(FieldKey::Timeline)
                        on_change=form.on_change(FieldKey::Timeline)
                        on_focus=form.on_focus(FieldKey::Timeline)
                        on_blur=form.on_blur()
                        delay=0.45
                    />
                </div>
                <div class="pt-4 animate-slide-up" style="animation-delay: 0.5s">
                    <button
                        type="submit"
                        class="w-full bg-gradient-to-r from-primary-500 to-accent-500 hover:from-primary-600 hover:to-accent-600 text-white py-4 rounded-lg flex items-center justify-center font-medium transition-all"
                    >
                        "Submit Request"
                        <span class="ml-2">"➤"</span>
                    </button>
                </div>
            </form>
        </Show>
    }
}
