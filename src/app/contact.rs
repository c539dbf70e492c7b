use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    form_field::{FieldType, FormField},
    success::SuccessState,
    use_form,
};
use crate::{
    catalog::{catalog, WHATSAPP_BASE, WHATSAPP_NUMBER},
    contact::{FieldKey, FormKind},
};

#[component]
pub fn ContactPage() -> impl IntoView {
    let profile = &catalog().profile;

    view! {
        <Title text="Contact" />
        <section class="py-8">
            <h2 class="text-3xl md:text-5xl font-bold mb-4 text-center bg-gradient-to-r from-primary-500 to-accent-500 text-transparent bg-clip-text">
                "Get In Touch"
            </h2>
            <p class="text-center text-gray-300 max-w-2xl mx-auto mb-12">
                "Have a project in mind or just want to say hello? Send a message and it lands straight in my WhatsApp."
            </p>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="space-y-4">
                    <ContactDetail icon="📍" title="Location" text=profile.location.clone() />
                    <ContactDetail icon="📞" title="Phone" text=profile.phone.clone() />
                    <div class="p-4 rounded-xl bg-dark-800">
                        <a
                            href=format!("{WHATSAPP_BASE}/{WHATSAPP_NUMBER}")
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center text-green-400 hover:text-green-300 font-medium"
                        >
                            "💬 Chat on WhatsApp"
                        </a>
                    </div>
                </div>
                <div class="lg:col-span-2 p-8 rounded-2xl bg-dark-800 shadow-md">
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(icon: &'static str, title: &'static str, text: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-4 rounded-xl bg-dark-800">
            <span class="text-2xl">{icon}</span>
            <div>
                <div class="text-sm text-gray-400">{title}</div>
                <div class="font-medium">{text}</div>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let form = use_form(FormKind::Contact, None);

    view! {
        <Show
            when=move || !form.is_submitted().get()
            fallback=|| {
                view! {
                    <SuccessState
                        title="Message Sent!"
                        body="Your message has been sent to WhatsApp. I'll get back to you as soon as possible!"
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
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
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
                        delay=0.1
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
                        delay=0.15
                    />
                </div>
                <FormField
                    label="Message"
                    icon="💬"
                    name=FieldKey::Message
                    field_type=FieldType::TextArea
                    rows=5
                    value=form.value(FieldKey::Message)
                    is_active=form.is_active(FieldKey::Message)
                    on_change=form.on_change(FieldKey::Message)
                    on_focus=form.on_focus(FieldKey::Message)
                    on_blur=form.on_blur()
                    placeholder="How can I help?"
                    required=true
                    delay=0.2
                />
                <button
                    type="submit"
                    class="w-full bg-gradient-to-r from-primary-500 to-accent-500 hover:from-primary-600 hover:to-accent-600 text-white py-4 rounded-lg flex items-center justify-center font-medium transition-all"
                >
                    "Send Message"
                    <span class="ml-2">"➤"</span>
                </button>
            </form>
        </Show>
    }
}
