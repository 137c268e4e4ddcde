// Amparo practice site — Leptos 0.8 CSR

mod admin;
mod api;
mod icons;
mod observe;
mod sections;

use amparo_core::SectionVisibility;
use leptos::prelude::*;
use sections::*;

use crate::api::ConfigResource;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // One shared config fetch; sections and the admin editor all derive
    // from it, and the editor refetches it after a save.
    let configs: ConfigResource = LocalResource::new(|| api::fetch_configs());

    // Fail-open: everything is visible until config says otherwise.
    let visibility = Memo::new(move |_| {
        let loaded = api::loaded(configs);
        SectionVisibility::resolve(loaded.as_deref())
    });

    Effect::new(move |_| {
        leptos::logging::log!("visibilidade das seções: {:?}", visibility.get());
    });

    view! {
        <Nav configs=configs />
        <main>
            <Show when=move || visibility.get().hero>
                <Hero configs=configs />
            </Show>
            <Show when=move || visibility.get().about>
                <About configs=configs />
            </Show>
            <Show when=move || visibility.get().services>
                <Specialties configs=configs />
            </Show>
        </main>
        <Footer configs=configs />
    }
}
