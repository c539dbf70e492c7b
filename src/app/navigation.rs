use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::catalog::TABS;

/// Dock of page tabs: bottom on phones, top on tablets, right edge on desktop.
#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="fixed z-40 bottom-4 left-1/2 -translate-x-1/2 md:bottom-auto md:top-4 lg:top-1/2 lg:left-auto lg:right-4 lg:-translate-y-1/2 lg:translate-x-0">
            <ul class="flex lg:flex-col gap-2 p-2 rounded-2xl bg-black/40 backdrop-blur-md border border-white/10 shadow-lg">
                {TABS
                    .iter()
                    .map(|tab| {
                        let is_active = move || pathname.get() == tab.path;
                        view! {
                            <li>
                                <A
                                    href=tab.path
                                    attr:aria-label=tab.label
                                    attr:title=tab.label
                                    attr:class=move || {
                                        if is_active() {
                                            "flex items-center justify-center w-11 h-11 lg:w-12 lg:h-12 rounded-xl text-xl bg-white/10 ring-2 ring-primary-400 ring-offset-2 ring-offset-black/30 transition-all"
                                        } else {
                                            "flex items-center justify-center w-11 h-11 lg:w-12 lg:h-12 rounded-xl text-xl hover:bg-white/10 hover:scale-110 transition-all"
                                        }
                                    }
                                >
                                    <span aria-hidden="true">{tab.icon}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
