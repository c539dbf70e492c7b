mod about;
mod contact;
mod footer;
mod form_field;
mod homepage;
mod navigation;
mod portfolio;
mod service_modal;
mod services;
mod success;
mod use_form;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use contact::ContactPage;
use footer::Footer;
use homepage::HomePage;
use navigation::Navigation;
use portfolio::PortfolioPage;
use services::ServicesPage;

pub use use_form::{use_form, BrowserNavigator, FormController};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen flex flex-col bg-dark-900 text-gray-100 font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />
        <Meta
            name="description"
            content="Full-stack software engineer building web and mobile products."
        />

        <Router>
            <Navigation />
            <main class="flex flex-col flex-grow w-full max-w-6xl mx-auto px-4 pt-8 md:pt-24 pb-28 lg:pb-8">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/portfolio") view=PortfolioPage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
