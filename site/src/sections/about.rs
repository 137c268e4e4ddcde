//! The "Sobre a Psicóloga" section.
//!
//! Two cards: professional presentation (name, title, description,
//! credentials) and the specialty list, both fed from config with per-field
//! fallbacks. Entrance animations are gated by a one-shot viewport reveal.

use amparo_core::config::{self, Credential};
use amparo_core::{SpecialtyIcon, color, specialty};
use leptos::html::Section;
use leptos::prelude::*;

use super::{GradientText, reveal_class};
use crate::api::{self, ConfigResource, Scope, SpecialtyResource};
use crate::icons::SpecialtyGlyph;
use crate::observe::use_reveal;

#[component]
pub fn About(configs: ConfigResource) -> impl IntoView {
    // Independent fetch: either source may arrive first, each side renders
    // its defaults until its own data lands.
    let specialties: SpecialtyResource =
        LocalResource::new(|| api::fetch_specialties(Scope::Admin));

    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref, "0px 0px -50px 0px");

    let snapshot = Memo::new(move |_| api::loaded(configs).unwrap_or_default());
    let credentials = Memo::new(move |_| {
        let active = Credential::active_sorted(&snapshot.with(|list| config::about_credentials(list)));
        if active.is_empty() {
            Credential::fallback_set()
        } else {
            active
        }
    });

    view! {
        <section id="about" data-section="about" class="main-section" node_ref=section_ref>
            <div class="section-inner">
                <div class="about-grid">
                    <div class=move || reveal_class("card reveal-rise", revealed.get())>
                        <h3 class="about-name">
                            {move || {
                                let list = snapshot.get();
                                let name = config::general_info(&list).display_name().to_string();
                                let gradient = config::badge_gradient(&list);
                                view! { <GradientText text=name gradient=gradient /> }
                            }}
                        </h3>
                        <p class="about-title">
                            {move || {
                                let list = snapshot.get();
                                format!(
                                    "{} • CRP: {}",
                                    config::professional_title(&list).display_title(),
                                    config::general_info(&list).display_crp(),
                                )
                            }}
                        </p>
                        <div class="about-description">
                            {move || {
                                snapshot
                                    .with(|list| {
                                        config::about_section(list)
                                            .display_description()
                                            .split('\n')
                                            .enumerate()
                                            .map(|(index, paragraph)| {
                                                let class = if index > 0 {
                                                    "paragraph spaced"
                                                } else {
                                                    "paragraph"
                                                };
                                                view! { <p class=class>{paragraph.to_string()}</p> }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </div>
                        <div class="credentials-grid">
                            {move || {
                                credentials
                                    .get()
                                    .into_iter()
                                    .map(|credential| {
                                        let class = format!(
                                            "credential-card bg-gradient-to-br {}",
                                            credential.gradient,
                                        );
                                        view! {
                                            <div class=class>
                                                <div class="credential-title">{credential.title}</div>
                                                <div class="credential-subtitle">{credential.subtitle}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>

                    <div
                        class=move || reveal_class("card reveal-rise", revealed.get())
                        style="transition-delay: 200ms"
                    >
                        <h2 class="card-title">
                            {move || {
                                let list = snapshot.get();
                                let title = config::specialties_section(&list)
                                    .display_title()
                                    .to_string();
                                let gradient = config::badge_gradient(&list);
                                view! { <GradientText text=title gradient=gradient /> }
                            }}
                        </h2>
                        <p class="card-subtitle">
                            {move || {
                                snapshot
                                    .with(|list| {
                                        config::specialties_section(list)
                                            .display_subtitle()
                                            .to_string()
                                    })
                            }}
                        </p>
                        <div class="specialty-rows">
                            {move || {
                                let active = specialty::active_sorted(
                                    &api::loaded(specialties).unwrap_or_default(),
                                );
                                active
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| {
                                        let icon = SpecialtyIcon::from_name(&item.icon);
                                        let tile = color::soft_color(&item.icon_color);
                                        // Stagger after the card's own 400ms entrance
                                        let delay = format!(
                                            "transition-delay: {}ms",
                                            400 + index * 100,
                                        );
                                        view! {
                                            <div
                                                class=move || reveal_class(
                                                    "specialty-row reveal-rise",
                                                    revealed.get(),
                                                )
                                                style=delay
                                            >
                                                <div
                                                    class="specialty-row-icon"
                                                    style=format!("background-color: {tile}")
                                                >
                                                    <SpecialtyGlyph icon=icon color=item.icon_color.clone() />
                                                </div>
                                                <div class="specialty-row-body">
                                                    <h4>{item.title.clone()}</h4>
                                                    <p>{item.description.clone()}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
