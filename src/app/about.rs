use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::catalog::{catalog, Experience};

#[component]
pub fn AboutPage() -> impl IntoView {
    let catalog = catalog();

    view! {
        <Title text="About Me" />
        <section class="py-8">
            <h2 class="text-3xl md:text-5xl font-bold mb-12 text-center bg-gradient-to-r from-primary-500 to-accent-500 text-transparent bg-clip-text">
                "About Me"
            </h2>
            <div class="max-w-3xl mx-auto mb-16 space-y-4">
                {catalog
                    .profile
                    .about
                    .iter()
                    .map(|p| view! { <p class="text-lg leading-relaxed text-gray-300">{p.clone()}</p> })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                <div>
                    <h3 class="text-2xl font-bold mb-8">"Skills"</h3>
                    {catalog
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <SkillBar
                                    name=skill.name.clone()
                                    level=skill.level
                                    delay_ms=(i as f64 * 50.0).min(600.0)
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div>
                    <h3 class="text-2xl font-bold mb-8">"Experience"</h3>
                    <ol class="relative border-l border-gray-600 ml-3 space-y-10">
                        {catalog
                            .experiences
                            .iter()
                            .map(|e| view! { <ExperienceItem experience=e /> })
                            .collect_view()}
                    </ol>
                </div>
            </div>
        </section>
    }
}

/// Progress bar that fills to `level` percent shortly after hydration.
#[component]
fn SkillBar(name: String, level: u8, delay_ms: f64) -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(move |_: ()| set_visible(true), delay_ms);
    // effects only run in the browser
    Effect::new(move |_| start(()));

    view! {
        <div class="mb-6 group p-2 -mx-2 rounded-lg transition-all duration-300 hover:bg-white/5 hover:scale-[1.02]">
            <div class="flex justify-between mb-2">
                <span class="text-sm font-medium group-hover:text-primary-500">{name}</span>
                <span class="text-sm font-medium group-hover:text-primary-500">{level}"%"</span>
            </div>
            <div class="h-2 bg-dark-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-primary-500 to-accent-500 rounded-full transition-all duration-1000 ease-out"
                    style=move || {
                        if visible.get() { format!("width: {level}%") } else { "width: 0%".to_string() }
                    }
                ></div>
            </div>
        </div>
    }
}

#[component]
fn ExperienceItem(experience: &'static Experience) -> impl IntoView {
    view! {
        <li class="ml-6">
            <span class="absolute -left-2 w-4 h-4 rounded-full bg-primary-500 ring-4 ring-dark-900"></span>
            <h4 class="text-lg font-semibold">{experience.title.clone()}</h4>
            <div class="text-sm text-accent-400 mb-2">
                {experience.company.clone()} " · " {experience.period.clone()}
            </div>
            <p class="text-sm text-gray-300 leading-relaxed">{experience.description.clone()}</p>
        </li>
    }
}
