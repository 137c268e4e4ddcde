use leptos::prelude::*;

use crate::admin::AboutTextsForm;
use crate::api::ConfigResource;

#[component]
pub fn Nav(configs: ConfigResource) -> impl IntoView {
    let (drawer_open, set_drawer_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">"Amparo"</span>
                    <span class="nav-subtitle">"Psicologia"</span>
                </a>
                <div class="nav-links">
                    <a href="#about" class="nav-link">"Sobre"</a>
                    <a href="#especialidades" class="nav-link">"Especialidades"</a>
                    <button
                        class=move || if drawer_open.get() { "nav-cta active" } else { "nav-cta" }
                        on:click=move |_| set_drawer_open.update(|open| *open = !*open)
                    >
                        {move || if drawer_open.get() { "Fechar" } else { "Editar" }}
                    </button>
                </div>
            </div>

            // Admin editor drawer
            <Show when=move || drawer_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        <p class="drawer-heading">"Textos da seção Sobre"</p>
                        <AboutTextsForm configs=configs />
                    </div>
                </div>
            </Show>
        </nav>
    }
}
