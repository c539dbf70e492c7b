use leptos::prelude::*;
use leptos_meta::Title;

use super::service_modal::ServiceRequestModal;
use crate::catalog::catalog;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let modal_open = RwSignal::new(false);

    view! {
        <Title text="Services" />
        <section class="py-8">
            <h2 class="text-3xl md:text-5xl font-bold mb-4 text-center bg-gradient-to-r from-primary-500 to-accent-500 text-transparent bg-clip-text">
                "Services"
            </h2>
            <p class="text-center text-gray-300 max-w-2xl mx-auto mb-12">
                "From a first prototype to a production launch, here is how I can help."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {catalog()
                    .services
                    .iter()
                    .enumerate()
                    .map(|(i, service)| {
                        view! {
                            <div
                                class="p-6 rounded-2xl bg-dark-800 shadow-md hover:shadow-xl hover:-translate-y-1 transition-all animate-slide-up"
                                style=format!("animation-delay: {:.1}s", (i as f64 * 0.1).min(0.5))
                            >
                                <h3 class="text-xl font-semibold mb-2 text-primary-400">
                                    {service.title.clone()}
                                </h3>
                                <p class="text-sm text-gray-300 leading-relaxed">
                                    {service.desc.clone()}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex justify-center mt-12">
                <button
                    type="button"
                    class="px-8 py-4 rounded-lg font-medium text-white bg-gradient-to-r from-primary-500 to-accent-500 hover:from-primary-600 hover:to-accent-600 transition-all"
                    on:click=move |_| modal_open.set(true)
                >
                    "Request Custom Service"
                </button>
            </div>
        </section>
        <ServiceRequestModal open=modal_open />
    }
}
