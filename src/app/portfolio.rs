use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    carousel::Carousel,
    catalog::{catalog, Project},
};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <section class="py-8">
            <h2 class="text-3xl md:text-5xl font-bold mb-12 text-center bg-gradient-to-r from-primary-500 to-accent-500 text-transparent bg-clip-text">
                "Featured Projects"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {catalog()
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(project.images.len()));
    let current = move || carousel.with(Carousel::current);
    let src = move || project.images.get(current()).cloned().unwrap_or_default();
    let total = carousel.with_untracked(Carousel::total);

    view! {
        <div
            class="h-full group bg-dark-800 rounded-2xl overflow-hidden shadow-md hover:shadow-xl transition-shadow animate-slide-up"
            style=format!("animation-delay: {:.1}s", (index as f64 * 0.1).min(0.5))
        >
            <div class="relative">
                <img
                    src=src
                    alt=project.title.clone()
                    class="w-full h-48 object-cover transition-transform group-hover:scale-105"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none"></div>
                <Show when=move || !carousel.with(Carousel::is_single)>
                    <button
                        type="button"
                        aria-label="Previous image"
                        class="absolute left-2 top-1/2 -translate-y-1/2 w-8 h-8 rounded-full bg-black/50 text-white hover:bg-black/70"
                        on:click=move |_| {
                            carousel.update(|c| {
                                c.prev();
                            })
                        }
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        aria-label="Next image"
                        class="absolute right-2 top-1/2 -translate-y-1/2 w-8 h-8 rounded-full bg-black/50 text-white hover:bg-black/70"
                        on:click=move |_| {
                            carousel.update(|c| {
                                c.next();
                            })
                        }
                    >
                        "›"
                    </button>
                    <div class="absolute bottom-2 left-1/2 -translate-x-1/2 flex gap-1.5">
                        {(0..total)
                            .map(|i| {
                                view! {
                                    <button
                                        type="button"
                                        aria-label=format!("Show image {}", i + 1)
                                        class=move || {
                                            if current() == i {
                                                "w-2.5 h-2.5 rounded-full bg-white"
                                            } else {
                                                "w-2.5 h-2.5 rounded-full bg-white/50 hover:bg-white/80"
                                            }
                                        }
                                        on:click=move |_| {
                                            carousel.update(|c| {
                                                c.go_to(i);
                                            })
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title.clone()}</h3>
                <p class="text-gray-300 mb-4 text-sm leading-relaxed">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-xs rounded-full bg-primary-500/10 text-primary-400">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                {project
                    .url
                    .clone()
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center text-primary-400 hover:text-primary-300 font-medium text-sm transition-colors"
                            >
                                "View Project"
                                <span class="ml-1">"↗"</span>
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
