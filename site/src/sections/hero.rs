use amparo_core::config;
use leptos::prelude::*;

use super::GradientText;
use crate::api::{self, ConfigResource};

#[component]
pub fn Hero(configs: ConfigResource) -> impl IntoView {
    let snapshot = Memo::new(move |_| api::loaded(configs).unwrap_or_default());

    view! {
        <section id="hero" data-section="hero" class="hero">
            <div class="hero-inner">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {move || {
                            let list = snapshot.get();
                            let name = config::general_info(&list).display_name().to_string();
                            let gradient = config::badge_gradient(&list);
                            view! { <GradientText text=name gradient=gradient /> }
                        }}
                    </h1>
                    <p class="hero-subtitle">
                        {move || {
                            let list = snapshot.get();
                            format!(
                                "{} • CRP: {}",
                                config::professional_title(&list).display_title(),
                                config::general_info(&list).display_crp(),
                            )
                        }}
                    </p>
                    <div class="hero-actions">
                        <a href="#about" class="btn btn-primary">
                            "Conheça meu trabalho"
                        </a>
                        <a href="#especialidades" class="btn btn-secondary">
                            "Especialidades"
                        </a>
                    </div>
                </div>
                {move || {
                    snapshot
                        .with(|list| config::hero_image(list))
                        .map(|path| {
                            view! {
                                <div class="hero-portrait">
                                    <img src=path alt="Foto de perfil" />
                                </div>
                            }
                        })
                }}
            </div>
        </section>
    }
}
