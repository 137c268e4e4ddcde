//! The standalone specialties grid.
//!
//! Reads the public specialty list; renders nothing at all while the list
//! is empty (loading, fetch failure, or everything deactivated).

use amparo_core::config;
use amparo_core::{SpecialtyIcon, color, specialty};
use leptos::html::Section;
use leptos::prelude::*;

use super::{GradientText, reveal_class};
use crate::api::{self, ConfigResource, Scope, SpecialtyResource};
use crate::icons::SpecialtyGlyph;
use crate::observe::use_reveal;

#[component]
pub fn Specialties(configs: ConfigResource) -> impl IntoView {
    let specialties: SpecialtyResource =
        LocalResource::new(|| api::fetch_specialties(Scope::Public));

    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref, "0px 0px -100px 0px");

    let snapshot = Memo::new(move |_| api::loaded(configs).unwrap_or_default());
    let active = Memo::new(move |_| {
        specialty::active_sorted(&api::loaded(specialties).unwrap_or_default())
    });

    view! {
        <Show when=move || !active.get().is_empty()>
            <section
                id="especialidades"
                data-section="services"
                class="specialties-section"
                node_ref=section_ref
            >
                <div class="section-inner">
                    <div class=move || reveal_class("section-header reveal-rise", revealed.get())>
                        <span class=move || {
                            let gradient = snapshot
                                .with(|list| config::badge_gradient(list))
                                .unwrap_or_else(|| super::DEFAULT_GRADIENT.to_string());
                            format!("section-badge bg-gradient-to-r {gradient}")
                        }>
                            "ESPECIALIDADES"
                        </span>
                        <h2 class="section-title">
                            {move || {
                                let list = snapshot.get();
                                let title = config::specialties_section(&list)
                                    .display_title()
                                    .to_string();
                                let gradient = config::badge_gradient(&list);
                                view! { <GradientText text=title gradient=gradient /> }
                            }}
                        </h2>
                        <p class="section-description">
                            {move || {
                                snapshot
                                    .with(|list| {
                                        config::specialties_section(list)
                                            .display_subtitle()
                                            .to_string()
                                    })
                            }}
                        </p>
                    </div>

                    <div class="specialties-grid">
                        {move || {
                            active
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let icon = SpecialtyIcon::from_name(&item.icon);
                                    let card_bg = color::with_alpha(&item.icon_color, 0.08);
                                    let card_border = color::with_alpha(&item.icon_color, 0.2);
                                    let tile_bg = color::with_alpha(&item.icon_color, 0.15);
                                    let delay = format!(
                                        "transition-delay: {}ms; background-color: {card_bg}; border-color: {card_border}",
                                        index * 150,
                                    );
                                    view! {
                                        <div
                                            class=move || reveal_class(
                                                "specialty-card reveal-rise",
                                                revealed.get(),
                                            )
                                            style=delay
                                        >
                                            <div
                                                class="specialty-card-icon"
                                                style=format!("background-color: {tile_bg}")
                                            >
                                                <SpecialtyGlyph
                                                    icon=icon
                                                    size="32"
                                                    color=item.icon_color.clone()
                                                />
                                            </div>
                                            <h3>{item.title.clone()}</h3>
                                            <p>{item.description.clone()}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <div class=move || reveal_class("section-cta reveal-rise", revealed.get())>
                        <span class="section-cta-pill">
                            <SpecialtyGlyph icon=SpecialtyIcon::Sparkles color="#A855F7".to_string() />
                            "Pronta para te ajudar em cada etapa"
                        </span>
                    </div>
                </div>
            </section>
        </Show>
    }
}
