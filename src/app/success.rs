use leptos::prelude::*;

/// Optimistic confirmation shown after a submit. It does not confirm delivery.
#[component]
pub fn SuccessState(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 animate-pop-in">
            <div class="text-7xl text-green-500 mb-6" aria-hidden="true">"✔"</div>
            <h3 class="text-2xl font-bold mb-2">{title}</h3>
            <p class="text-gray-300 text-center max-w-md">{body}</p>
        </div>
    }
}
