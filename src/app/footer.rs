use chrono::DateTime;
use leptos::prelude::*;

fn build_year() -> String {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.format("%Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full py-6 pb-24 lg:pb-6 text-center text-sm text-gray-400">
            "© " {build_year()} " · Built with Rust & Leptos"
        </footer>
    }
}
