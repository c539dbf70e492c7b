use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::catalog::catalog;

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = &catalog().profile;

    view! {
        <Title text="Home" />
        <section class="flex flex-col justify-center items-center text-center min-h-[70vh] gap-6">
            <p class="text-primary-400 font-medium tracking-widest uppercase text-sm animate-slide-up">
                "Hello, welcome to my portfolio"
            </p>
            <h1 class="text-4xl md:text-6xl font-bold bg-gradient-to-r from-primary-500 via-accent-500 to-primary-400 text-transparent bg-clip-text animate-slide-up">
                {profile.headline.clone()}
            </h1>
            <p class="max-w-2xl text-lg text-gray-300 leading-relaxed animate-slide-up">
                {profile.tagline.clone()}
            </p>
            <div class="flex flex-col sm:flex-row gap-4 mt-4 animate-slide-up" style="animation-delay: 0.2s">
                <A
                    href="/portfolio"
                    attr:class="px-6 py-3 rounded-lg font-medium text-white bg-gradient-to-r from-primary-500 to-accent-500 hover:from-primary-600 hover:to-accent-600 transition-all"
                >
                    "View My Work"
                </A>
                <A
                    href="/contact"
                    attr:class="px-6 py-3 rounded-lg font-medium border border-primary-500/50 text-primary-400 hover:bg-primary-500/10 transition-all"
                >
                    "Get In Touch"
                </A>
            </div>
            <p class="text-sm text-gray-400 mt-2">"📍 " {profile.location.clone()}</p>
        </section>
    }
}
